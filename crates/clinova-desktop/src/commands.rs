use jiff::civil::Date;
use serde::Serialize;
use specta::Type;
use tauri::State;
use tracing::{debug, info};

use clinova_api::{ApiClient, ApiError, admin, diagnostics, schedule as schedule_api, sessions};
use clinova_auth::client::{IdentityClient, build_client};
use clinova_auth::flows::{self, AuthTokens};
use clinova_core::models::booking::BookingRequest;
use clinova_core::models::diagnostic::{DiagnosticOutcome, DiagnosticRecord, NewDiagnostic};
use clinova_core::models::session::{Session, SessionStatus};
use clinova_core::models::therapist::{TherapistType, distinct_specialties, filter_directory};
use clinova_core::models::user::{NewProfile, Role, UserProfile};
use clinova_core::schedule::{
    WEEKDAYS, WeeklyAvailability, date_in_same_week, weekday_from_key,
};

use clinova_desktop::config::{self, ClinovaConfig, ConfigInfo};

use crate::state::{ActiveSession, BookingDraft, DesktopState};

async fn require_config(state: &DesktopState) -> Result<ClinovaConfig, String> {
    state
        .config
        .lock()
        .await
        .clone()
        .ok_or_else(|| "not configured: call configure() first".to_string())
}

async fn require_session(state: &DesktopState) -> Result<ActiveSession, String> {
    state
        .session
        .lock()
        .await
        .clone()
        .ok_or_else(|| "not signed in".to_string())
}

fn require_role(session: &ActiveSession, role: Role) -> Result<(), String> {
    if session.profile.role == role {
        Ok(())
    } else {
        Err(format!("this action requires the {} role", role.label()))
    }
}

fn api(config: &ClinovaConfig) -> ApiClient {
    ApiClient::new(config.api_base_url.clone())
}

fn identity(config: &ClinovaConfig) -> IdentityClient {
    build_client(config.identity_api_key.clone())
}

/// Fetch the profile for freshly issued tokens and install the session.
/// This is the one place wire role codes are decoded.
async fn establish_session(
    state: &DesktopState,
    config: &ClinovaConfig,
    tokens: AuthTokens,
) -> Result<UserProfile, String> {
    let profile = clinova_api::profile::fetch_profile(&api(config), &tokens.uid)
        .await
        .map_err(|e| e.to_string())?;

    info!(uid = %profile.uid, role = profile.role.label(), "session established");
    *state.session.lock().await = Some(ActiveSession {
        tokens,
        profile: profile.clone(),
    });
    Ok(profile)
}

#[tauri::command]
pub async fn configure(
    state: State<'_, DesktopState>,
    api_base_url: String,
    identity_api_key: String,
    project_id: String,
) -> Result<ConfigInfo, String> {
    let new_config = ClinovaConfig {
        config_version: 0,
        api_base_url,
        identity_api_key,
        project_id,
        created_at: jiff::Timestamp::now(),
    };
    config::save_config(&new_config).map_err(|e| e.to_string())?;

    let info = config::config_info(&new_config);
    *state.config.lock().await = Some(new_config);
    Ok(info)
}

/// Load the persisted config into state, if one exists.
#[tauri::command]
pub async fn load_config(state: State<'_, DesktopState>) -> Result<Option<ConfigInfo>, String> {
    if !config::has_config() {
        return Ok(None);
    }
    let loaded = config::load_config().map_err(|e| e.to_string())?;
    let info = config::config_info(&loaded);
    *state.config.lock().await = Some(loaded);
    Ok(Some(info))
}

#[tauri::command]
pub async fn sign_in(
    state: State<'_, DesktopState>,
    email: String,
    password: String,
) -> Result<UserProfile, String> {
    let config = require_config(&state).await?;
    let tokens = flows::sign_in_with_password(&identity(&config), &email, &password)
        .await
        .map_err(|e| e.to_string())?;
    establish_session(&state, &config, tokens).await
}

/// Create the identity account, then the backend profile, then sign in.
#[tauri::command]
pub async fn register(
    state: State<'_, DesktopState>,
    email: String,
    password: String,
    profile: NewProfile,
) -> Result<UserProfile, String> {
    let config = require_config(&state).await?;

    let tokens = flows::sign_up(&identity(&config), &email, &password)
        .await
        .map_err(|e| e.to_string())?;
    clinova_api::profile::register_profile(&api(&config), &tokens.id_token, &profile)
        .await
        .map_err(|e| e.to_string())?;

    establish_session(&state, &config, tokens).await
}

/// Swap the stored tokens for fresh ones without touching the profile.
#[tauri::command]
pub async fn refresh_session(state: State<'_, DesktopState>) -> Result<(), String> {
    let config = require_config(&state).await?;
    let session = require_session(&state).await?;

    let tokens = flows::refresh_auth(&identity(&config), &session.tokens.refresh_token)
        .await
        .map_err(|e| e.to_string())?;

    let mut guard = state.session.lock().await;
    if let Some(active) = guard.as_mut() {
        active.tokens = tokens;
    }
    Ok(())
}

#[tauri::command]
pub async fn sign_out(state: State<'_, DesktopState>) -> Result<(), String> {
    *state.session.lock().await = None;
    *state.booking.lock().await = None;
    *state.schedule_editor.lock().await = None;
    info!("signed out");
    Ok(())
}

#[tauri::command]
pub async fn current_profile(state: State<'_, DesktopState>) -> Result<UserProfile, String> {
    Ok(require_session(&state).await?.profile)
}

// ── Weekly schedule editor (therapists) ─────────────────────────────────

/// Open the grid editor on the therapist's saved template. A therapist
/// who has never saved starts from a blank grid.
#[tauri::command]
pub async fn open_schedule_editor(
    state: State<'_, DesktopState>,
) -> Result<WeeklyAvailability, String> {
    let config = require_config(&state).await?;
    let session = require_session(&state).await?;
    require_role(&session, Role::Therapist)?;

    let weekly = match schedule_api::fetch_weekly(&api(&config), &session.profile.uid).await {
        Ok(weekly) => weekly,
        Err(ApiError::NotFound { .. }) => WeeklyAvailability::blank(),
        Err(e) => return Err(e.to_string()),
    };

    *state.schedule_editor.lock().await = Some(weekly.clone());
    Ok(weekly)
}

/// Flip one cell in the open editor; returns the cell's new state.
#[tauri::command]
pub async fn toggle_schedule_block(
    state: State<'_, DesktopState>,
    day: String,
    block: u8,
) -> Result<bool, String> {
    let weekday = weekday_from_key(&day).ok_or_else(|| format!("unknown day key: {day}"))?;

    let mut editor = state.schedule_editor.lock().await;
    let weekly = editor
        .as_mut()
        .ok_or_else(|| "schedule editor is not open".to_string())?;
    weekly.toggle_block(weekday, block).map_err(|e| e.to_string())
}

/// Persist the edited grid.
#[tauri::command]
pub async fn save_schedule(state: State<'_, DesktopState>) -> Result<(), String> {
    let config = require_config(&state).await?;
    let session = require_session(&state).await?;
    require_role(&session, Role::Therapist)?;

    let weekly = state
        .schedule_editor
        .lock()
        .await
        .clone()
        .ok_or_else(|| "schedule editor is not open".to_string())?;

    schedule_api::save_weekly(&api(&config), &session.profile.uid, &weekly)
        .await
        .map_err(|e| e.to_string())
}

// ── Booking (patients) ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Type)]
pub struct BookingContext {
    pub therapist_id: String,
    /// Day keys with at least one enabled block, for the day buttons.
    pub open_days: Vec<String>,
}

/// Start a booking against one therapist: resolve the participant ids
/// from the two account emails and load the therapist's template.
#[tauri::command]
pub async fn open_booking(
    state: State<'_, DesktopState>,
    therapist_email: String,
) -> Result<BookingContext, String> {
    let config = require_config(&state).await?;
    let session = require_session(&state).await?;
    require_role(&session, Role::Patient)?;

    let client = api(&config);
    let participants =
        schedule_api::resolve_participants(&client, &therapist_email, &session.profile.email)
            .await
            .map_err(|e| e.to_string())?;
    let weekly = schedule_api::fetch_weekly(&client, &participants.therapist_id)
        .await
        .map_err(|e| e.to_string())?;

    let context = BookingContext {
        therapist_id: participants.therapist_id.clone(),
        open_days: weekly.open_days().iter().map(|d| d.to_string()).collect(),
    };

    let mut draft = BookingDraft {
        participants,
        planner: Default::default(),
    };
    draft.planner.set_weekly(weekly);
    *state.booking.lock().await = Some(draft);

    Ok(context)
}

/// Pick a date and return the open blocks for it. The reservation fetch
/// is tagged; a response superseded by a later date pick is discarded.
#[tauri::command]
pub async fn select_booking_date(
    state: State<'_, DesktopState>,
    fecha: String,
) -> Result<Vec<u8>, String> {
    let config = require_config(&state).await?;
    let date: Date = fecha.parse().map_err(|e: jiff::Error| e.to_string())?;

    let therapist_id = {
        let mut booking = state.booking.lock().await;
        let draft = booking
            .as_mut()
            .ok_or_else(|| "no booking in progress".to_string())?;
        draft.planner.set_date(date);
        draft.participants.therapist_id.clone()
    };

    let tag = state.reservation_seq.issue();
    let reservations = schedule_api::fetch_reservations(&api(&config), &therapist_id, date)
        .await
        .map_err(|e| e.to_string())?;

    let mut booking = state.booking.lock().await;
    let draft = booking
        .as_mut()
        .ok_or_else(|| "no booking in progress".to_string())?;
    if state.reservation_seq.is_current(tag) {
        draft.planner.set_reserved(reservations);
    } else {
        debug!(tag, "discarding superseded reservation response");
    }
    Ok(draft.planner.open_blocks().to_vec())
}

/// Select one of the open blocks. Returns false if the block has closed
/// since the list was shown.
#[tauri::command]
pub async fn select_booking_block(
    state: State<'_, DesktopState>,
    block: u8,
) -> Result<bool, String> {
    let mut booking = state.booking.lock().await;
    let draft = booking
        .as_mut()
        .ok_or_else(|| "no booking in progress".to_string())?;
    Ok(draft.planner.select_block(block))
}

/// The seven dates (Monday through Sunday) of the week containing
/// `fecha`, or of the current week when no date is picked yet.
#[tauri::command]
pub fn booking_week(fecha: Option<String>) -> Result<Vec<String>, String> {
    let base: Date = match fecha {
        Some(raw) => raw.parse().map_err(|e: jiff::Error| e.to_string())?,
        None => jiff::Zoned::now().date(),
    };
    Ok(WEEKDAYS
        .iter()
        .map(|weekday| date_in_same_week(base, *weekday).to_string())
        .collect())
}

#[tauri::command]
pub async fn submit_booking(
    state: State<'_, DesktopState>,
    reason: String,
) -> Result<(), String> {
    let config = require_config(&state).await?;
    let session = require_session(&state).await?;
    require_role(&session, Role::Patient)?;
    if reason.trim().is_empty() {
        return Err("a reason is required".to_string());
    }

    let request = {
        let booking = state.booking.lock().await;
        let draft = booking
            .as_ref()
            .ok_or_else(|| "no booking in progress".to_string())?;
        let date = draft
            .planner
            .date()
            .ok_or_else(|| "no date selected".to_string())?;
        let block = draft
            .planner
            .selected_block()
            .ok_or_else(|| "no block selected".to_string())?;
        BookingRequest::new(
            draft.participants.therapist_id.clone(),
            draft.participants.patient_id.clone(),
            date,
            block,
            reason.trim(),
        )
        .map_err(|e| e.to_string())?
    };

    schedule_api::book(&api(&config), &request)
        .await
        .map_err(|e| e.to_string())?;

    info!(therapist_id = %request.therapist_id, date = %request.date, block = request.block, "session booked");
    *state.booking.lock().await = None;
    Ok(())
}

#[tauri::command]
pub async fn cancel_booking(state: State<'_, DesktopState>) -> Result<(), String> {
    *state.booking.lock().await = None;
    Ok(())
}

// ── Sessions & diagnostics ──────────────────────────────────────────────

#[tauri::command]
pub async fn list_sessions(state: State<'_, DesktopState>) -> Result<Vec<Session>, String> {
    let config = require_config(&state).await?;
    let session = require_session(&state).await?;

    sessions::list_sessions(&api(&config), session.profile.role, &session.profile.uid)
        .await
        .map_err(|e| e.to_string())
}

/// Confirm or reject a pending session.
#[tauri::command]
pub async fn set_session_status(
    state: State<'_, DesktopState>,
    session_id: String,
    status: SessionStatus,
) -> Result<Session, String> {
    let config = require_config(&state).await?;
    let session = require_session(&state).await?;
    require_role(&session, Role::Therapist)?;

    if !matches!(status, SessionStatus::Confirmed | SessionStatus::Rejected) {
        return Err("a pending session can only be confirmed or rejected".to_string());
    }

    sessions::set_session_status(&api(&config), &session_id, status)
        .await
        .map_err(|e| e.to_string())
}

/// Attach a diagnostic to a confirmed session; the backend completes the
/// session in the same step.
#[tauri::command]
pub async fn submit_diagnostic(
    state: State<'_, DesktopState>,
    payload: NewDiagnostic,
) -> Result<DiagnosticOutcome, String> {
    let config = require_config(&state).await?;
    let session = require_session(&state).await?;
    require_role(&session, Role::Therapist)?;

    if !payload.diagnostic.is_complete() {
        return Err("every diagnostic field must be filled in".to_string());
    }

    diagnostics::submit_diagnostic(&api(&config), &payload)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn diagnostic_history(
    state: State<'_, DesktopState>,
) -> Result<Vec<DiagnosticRecord>, String> {
    let config = require_config(&state).await?;
    let session = require_session(&state).await?;
    require_role(&session, Role::Patient)?;

    diagnostics::patient_history(&api(&config), &session.profile.uid)
        .await
        .map_err(|e| e.to_string())
}

// ── Directory & administration ──────────────────────────────────────────

/// The therapist directory, filtered client-side by name search and
/// specialty.
#[tauri::command]
pub async fn list_therapists(
    state: State<'_, DesktopState>,
    search: Option<String>,
    specialty: Option<String>,
) -> Result<Vec<UserProfile>, String> {
    let config = require_config(&state).await?;
    require_session(&state).await?;

    let all = admin::list_therapists(&api(&config))
        .await
        .map_err(|e| e.to_string())?;
    let filtered = filter_directory(
        &all,
        search.as_deref().unwrap_or(""),
        specialty.as_deref(),
    );
    Ok(filtered.into_iter().cloned().collect())
}

/// Distinct specialties in the directory, for the filter dropdown.
#[tauri::command]
pub async fn therapist_specialties(
    state: State<'_, DesktopState>,
) -> Result<Vec<String>, String> {
    let config = require_config(&state).await?;
    require_session(&state).await?;

    let all = admin::list_therapists(&api(&config))
        .await
        .map_err(|e| e.to_string())?;
    Ok(distinct_specialties(&all))
}

#[tauri::command]
pub async fn list_users(state: State<'_, DesktopState>) -> Result<Vec<UserProfile>, String> {
    let config = require_config(&state).await?;
    let session = require_session(&state).await?;
    require_role(&session, Role::Admin)?;

    admin::list_users(&api(&config))
        .await
        .map_err(|e| e.to_string())
}

/// Reassign a user's role. The administrator role itself can neither be
/// granted nor revoked from here.
#[tauri::command]
pub async fn set_user_role(
    state: State<'_, DesktopState>,
    uid: String,
    role_code: u8,
) -> Result<(), String> {
    let config = require_config(&state).await?;
    let session = require_session(&state).await?;
    require_role(&session, Role::Admin)?;

    let role = Role::from_code(role_code).map_err(|e| e.to_string())?;
    if role == Role::Admin {
        return Err("the administrator role cannot be granted".to_string());
    }
    if uid == session.profile.uid {
        return Err("administrators cannot change their own role".to_string());
    }

    admin::set_user_role(&api(&config), &uid, role)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn list_therapist_types(
    state: State<'_, DesktopState>,
) -> Result<Vec<TherapistType>, String> {
    let config = require_config(&state).await?;
    require_session(&state).await?;

    admin::list_therapist_types(&api(&config))
        .await
        .map_err(|e| e.to_string())
}

/// Set the signed-in therapist's own specialty and refresh the cached
/// profile so the change shows immediately.
#[tauri::command]
pub async fn set_my_specialty(
    state: State<'_, DesktopState>,
    type_name: String,
) -> Result<(), String> {
    let config = require_config(&state).await?;
    let session = require_session(&state).await?;
    require_role(&session, Role::Therapist)?;

    if type_name.trim().is_empty() {
        return Err("a specialty must be selected".to_string());
    }

    admin::set_therapist_type(&api(&config), &session.profile.uid, &type_name)
        .await
        .map_err(|e| e.to_string())?;

    let mut guard = state.session.lock().await;
    if let Some(active) = guard.as_mut() {
        active.profile.therapist_type = Some(type_name);
    }
    Ok(())
}
