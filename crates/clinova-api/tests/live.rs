//! Integration tests against a running Clinova backend.
//!
//! Ignored by default — they need a reachable backend and seeded data.
//! Run with:
//! `CLINOVA_API_URL=http://127.0.0.1:3000 cargo test -p clinova-api -- --ignored`

use jiff::civil::date;

use clinova_api::ApiClient;
use clinova_api::{admin, schedule};

fn live_client() -> ApiClient {
    let base_url = std::env::var("CLINOVA_API_URL").expect("CLINOVA_API_URL must be set");
    ApiClient::new(base_url)
}

#[tokio::test]
#[ignore]
async fn therapist_directory_is_reachable() {
    let client = live_client();
    let therapists = admin::list_therapists(&client)
        .await
        .expect("list_therapists should succeed");

    println!("Directory has {} therapists:", therapists.len());
    for therapist in &therapists {
        println!(
            "  {} — {}",
            therapist.full_name(),
            therapist.therapist_type.as_deref().unwrap_or("(no specialty)")
        );
    }
}

#[tokio::test]
#[ignore]
async fn weekly_schedule_has_seven_day_rows() {
    let client = live_client();
    let therapists = admin::list_therapists(&client)
        .await
        .expect("list_therapists should succeed");
    let first = therapists.first().expect("backend should have a therapist");

    let weekly = schedule::fetch_weekly(&client, &first.uid)
        .await
        .expect("fetch_weekly should succeed");

    for (key, row) in [
        ("monday", &weekly.monday),
        ("wednesday", &weekly.wednesday),
        ("sunday", &weekly.sunday),
    ] {
        println!("  {key}: {} blocks", row.len());
    }
}

#[tokio::test]
#[ignore]
async fn reservations_come_back_for_an_arbitrary_date() {
    let client = live_client();
    let therapists = admin::list_therapists(&client)
        .await
        .expect("list_therapists should succeed");
    let first = therapists.first().expect("backend should have a therapist");

    let reservations = schedule::fetch_reservations(&client, &first.uid, date(2026, 1, 5))
        .await
        .expect("fetch_reservations should succeed");
    println!("{} reservations", reservations.len());
}
