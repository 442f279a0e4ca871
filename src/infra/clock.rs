//! Sleep adapter backed by the tokio timer.

use std::time::Duration;

use crate::application::ports::Sleeper;

/// Production [`Sleeper`] — delegates to `tokio::time::sleep`.
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
