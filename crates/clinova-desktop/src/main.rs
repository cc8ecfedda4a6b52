#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eyre::Result;

mod commands;
mod state;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .manage(state::DesktopState::default())
        .invoke_handler(tauri::generate_handler![
            commands::configure,
            commands::load_config,
            commands::sign_in,
            commands::register,
            commands::refresh_session,
            commands::sign_out,
            commands::current_profile,
            commands::open_schedule_editor,
            commands::toggle_schedule_block,
            commands::save_schedule,
            commands::open_booking,
            commands::select_booking_date,
            commands::select_booking_block,
            commands::booking_week,
            commands::submit_booking,
            commands::cancel_booking,
            commands::list_sessions,
            commands::set_session_status,
            commands::submit_diagnostic,
            commands::diagnostic_history,
            commands::list_therapists,
            commands::therapist_specialties,
            commands::list_users,
            commands::set_user_role,
            commands::list_therapist_types,
            commands::set_my_specialty,
        ])
        .run(tauri::generate_context!())
        .map_err(|e| eyre::eyre!("tauri error: {e}"))?;

    Ok(())
}
