use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tracing::warn;

/// Delay before the single retry of a reservation-list fetch.
pub const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Run `op`; if it fails, wait `delay` and run it exactly once more.
///
/// The reservation-list fetch is the only call site — no other backend
/// call retries.
pub async fn retry_once<T, E, F, Fut>(delay: Duration, mut op: F) -> Result<T, E>
where
    E: Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    match op().await {
        Ok(value) => Ok(value),
        Err(first) => {
            warn!(error = %first, "retrying once after failure");
            tokio::time::sleep(delay).await;
            op().await
        }
    }
}
