use std::sync::Arc;

use tokio::sync::Mutex;

use clinova_api::SequenceGuard;
use clinova_api::schedule::BookingParticipants;
use clinova_auth::flows::AuthTokens;
use clinova_core::models::user::UserProfile;
use clinova_core::schedule::{BookingPlanner, WeeklyAvailability};

use clinova_desktop::config::ClinovaConfig;

/// A signed-in identity plus the profile decoded at the fetch boundary.
/// Commands take what they need from here explicitly — nothing reads
/// identity ambiently.
#[derive(Debug, Clone)]
pub struct ActiveSession {
    pub tokens: AuthTokens,
    pub profile: UserProfile,
}

/// An in-progress booking against one therapist.
#[derive(Debug, Clone)]
pub struct BookingDraft {
    pub participants: BookingParticipants,
    pub planner: BookingPlanner,
}

pub struct DesktopState {
    pub config: Arc<Mutex<Option<ClinovaConfig>>>,
    pub session: Arc<Mutex<Option<ActiveSession>>>,
    pub booking: Arc<Mutex<Option<BookingDraft>>>,
    /// The therapist's own grid while the schedule editor is open.
    pub schedule_editor: Arc<Mutex<Option<WeeklyAvailability>>>,
    /// Tags reservation fetches so a superseded response cannot
    /// overwrite the planner after the user picks another date.
    pub reservation_seq: SequenceGuard,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            session: Arc::new(Mutex::new(None)),
            booking: Arc::new(Mutex::new(None)),
            schedule_editor: Arc::new(Mutex::new(None)),
            reservation_seq: SequenceGuard::new(),
        }
    }
}
