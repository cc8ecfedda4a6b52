//! Smoke test for the availability pipeline.
//!
//! Walks the same path the booking widget takes: therapist directory →
//! weekly template → reservations for a date → slot resolution. Needs a
//! reachable backend but no signed-in account.
//!
//! Usage:
//!   CLINOVA_API_URL=http://127.0.0.1:3000 \
//!   CLINOVA_DATE=2026-01-05 \
//!   cargo run -p clinova-desktop --example booking_smoke

use jiff::civil::Date;

use clinova_api::{ApiClient, admin, schedule};
use clinova_core::schedule::{available_blocks, block_label, day_key};
use clinova_desktop::config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt().with_env_filter("info").init();

    // CLINOVA_API_URL wins; otherwise fall back to the saved desktop config.
    let base_url = match std::env::var("CLINOVA_API_URL") {
        Ok(url) => url,
        Err(_) if config::has_config() => config::load_config()?.api_base_url,
        Err(_) => {
            return Err(eyre::eyre!(
                "set CLINOVA_API_URL or configure the desktop app first"
            ));
        }
    };
    let date: Date = match std::env::var("CLINOVA_DATE") {
        Ok(raw) => raw.parse()?,
        Err(_) => jiff::Zoned::now().date(),
    };

    let client = ApiClient::new(base_url);

    let therapists = admin::list_therapists(&client).await?;
    let Some(therapist) = therapists.first() else {
        println!("The directory is empty — seed a therapist first.");
        return Ok(());
    };
    println!(
        "Therapist: {} ({})",
        therapist.full_name(),
        therapist.therapist_type.as_deref().unwrap_or("no specialty")
    );

    let weekly = schedule::fetch_weekly(&client, &therapist.uid).await?;
    let key = day_key(date.weekday());
    println!(
        "Template:  {} block(s) enabled on {key}",
        weekly.enabled_blocks(date.weekday()).len()
    );

    let reservations = schedule::fetch_reservations(&client, &therapist.uid, date).await?;
    let reserved: Vec<u8> = reservations
        .iter()
        .filter(|slot| slot.day == key)
        .map(|slot| slot.block)
        .collect();
    println!("Reserved:  {} block(s) on {date}", reserved.len());

    let open = available_blocks(&weekly, date, &reserved);
    if open.is_empty() {
        println!("No open blocks on {date}.");
    } else {
        println!("Open blocks on {date}:");
        for block in open {
            println!("  {:>2}  {}", block, block_label(block));
        }
    }

    Ok(())
}
