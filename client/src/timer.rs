//! Browser timer backed by `setTimeout`.

use std::time::Duration;

use portfolio::timer::Timer;

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTimer;

impl Timer for GlooTimer {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}
