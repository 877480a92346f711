//! Host-provided delays.
//!
//! The core never blocks; it awaits a [`Timer`] the host implements on top
//! of its event loop (`gloo-timers` in the browser, `tokio::time` in tests).

use std::future::Future;
use std::time::Duration;

pub trait Timer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}
