//! Typewriter effect for hero titles.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

use std::cell::RefCell;
use std::time::Duration;

use crate::port::{Action, ElementRef, PresentationPort};
use crate::timer::Timer;

/// Successive prefixes of `text` on char boundaries, starting with `""`.
pub fn frames(text: &str) -> impl Iterator<Item = &str> {
    std::iter::once(0)
        .chain(text.char_indices().map(|(i, c)| i + c.len_utf8()))
        .map(move |end| &text[..end])
}

/// Type `text` into `element`, one character per `speed`.
pub async fn run<P, C>(port: &RefCell<P>, element: ElementRef, text: &str, timer: &C, speed: Duration)
where
    P: PresentationPort,
    C: Timer,
{
    for (i, frame) in frames(text).enumerate() {
        if i > 0 {
            timer.sleep(speed).await;
        }
        port.borrow_mut().apply(&Action::text(element.clone(), frame));
    }
}
