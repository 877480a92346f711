//! Contact form submission state machine.
//!
//! ```text
//! Idle --begin(valid)--> Pending --Ok--> Success --expire--> Idle
//!                           \--Err--> Idle (form kept)
//! ```
//!
//! Only one submission can be pending: the button is disabled while
//! pending and [`Submission::begin`] rejects re-entry regardless. Each
//! success gets a fresh generation so the auto-clear timer of an earlier
//! success cannot hide a newer status line.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::cell::RefCell;
use std::future::Future;
use std::time::Duration;

use crate::consts::{SUBMIT_BUSY_LABEL, SUBMIT_FAILURE_TEXT, SUBMIT_IDLE_LABEL, SUBMIT_SUCCESS_TEXT};
use crate::error::{SubmitError, SubmitRejected};
use crate::form::{self, ContactMessage, FormState};
use crate::page::Page;
use crate::port::{Action, ElementRef, Flag, Icon, PresentationPort};
use crate::store::PreferenceStore;
use crate::timer::Timer;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Success,
}

/// Submission state plus the generation of the latest success.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Submission {
    state: SubmissionState,
    generation: u64,
}

impl Submission {
    #[must_use]
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Validate the form and, if it passes, enter `Pending`.
    ///
    /// Field errors are shown (or cleared) either way. While already
    /// pending nothing happens at all.
    pub fn begin(&mut self, form: &mut FormState, message: &ContactMessage) -> (Result<(), SubmitRejected>, Vec<Action>) {
        if self.state == SubmissionState::Pending {
            return (Err(SubmitRejected::Pending), Vec::new());
        }
        let (errors, mut actions) = form::validate_form(form, message);
        if !errors.is_empty() {
            tracing::debug!(invalid = errors.len(), "submission rejected");
            return (Err(SubmitRejected::Invalid(errors.len())), actions);
        }
        self.state = SubmissionState::Pending;
        tracing::debug!("submission pending");
        actions.extend([
            Action::flag(ElementRef::SubmitButton, Flag::Disabled, true),
            Action::SetIcon { element: ElementRef::SubmitButton, icon: Icon::Spinner },
            Action::text(ElementRef::SubmitButton, SUBMIT_BUSY_LABEL),
        ]);
        (Ok(()), actions)
    }

    /// Finish the pending submission with the transport's result.
    ///
    /// Returns the success generation to hand to [`Submission::expire`].
    pub fn complete(&mut self, form: &mut FormState, result: Result<(), SubmitError>) -> (Option<u64>, Vec<Action>) {
        if self.state != SubmissionState::Pending {
            return (None, Vec::new());
        }
        let (generation, mut actions) = match result {
            Ok(()) => {
                self.state = SubmissionState::Success;
                self.generation += 1;
                form.reset();
                tracing::debug!(generation = self.generation, "submission sent");
                (
                    Some(self.generation),
                    vec![
                        Action::text(ElementRef::FormStatus, SUBMIT_SUCCESS_TEXT),
                        Action::flag(ElementRef::FormStatus, Flag::Error, false),
                        Action::flag(ElementRef::FormStatus, Flag::Success, true),
                        Action::ResetForm,
                    ],
                )
            }
            Err(err) => {
                // Keep the user's input so they can retry.
                self.state = SubmissionState::Idle;
                tracing::warn!(error = %err, "submission failed");
                (
                    None,
                    vec![
                        Action::text(ElementRef::FormStatus, SUBMIT_FAILURE_TEXT),
                        Action::flag(ElementRef::FormStatus, Flag::Success, false),
                        Action::flag(ElementRef::FormStatus, Flag::Error, true),
                    ],
                )
            }
        };
        actions.extend([
            Action::flag(ElementRef::SubmitButton, Flag::Disabled, false),
            Action::SetIcon { element: ElementRef::SubmitButton, icon: Icon::PaperPlane },
            Action::text(ElementRef::SubmitButton, SUBMIT_IDLE_LABEL),
        ]);
        (generation, actions)
    }

    /// Hide the success status, unless a newer success replaced it.
    pub fn expire(&mut self, generation: u64) -> Vec<Action> {
        if self.state != SubmissionState::Success || self.generation != generation {
            return Vec::new();
        }
        self.state = SubmissionState::Idle;
        vec![Action::flag(ElementRef::FormStatus, Flag::Success, false)]
    }
}

/// Where a contact message goes.
pub trait Transport {
    /// # Errors
    ///
    /// Returns [`SubmitError::Transport`] if the message was not delivered.
    fn send(&self, message: &ContactMessage) -> impl Future<Output = Result<(), SubmitError>>;
}

/// Stand-in transport: waits `latency`, then reports success.
#[derive(Debug, Clone)]
pub struct SimulatedTransport<T> {
    timer: T,
    latency: Duration,
}

impl<T: Timer> SimulatedTransport<T> {
    pub fn new(timer: T, latency: Duration) -> Self {
        Self { timer, latency }
    }
}

impl<T: Timer> Transport for SimulatedTransport<T> {
    async fn send(&self, _message: &ContactMessage) -> Result<(), SubmitError> {
        self.timer.sleep(self.latency).await;
        Ok(())
    }
}

/// How a call to [`run`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(SubmitRejected),
    Sent,
    Failed(SubmitError),
}

/// Drive one submission from click to auto-cleared status.
///
/// The page borrow is released around every await, so scroll and click
/// handlers keep running while the message is in flight.
pub async fn run<P, S, T, C>(page: &RefCell<Page<P, S>>, message: ContactMessage, transport: &T, timer: &C) -> SubmitOutcome
where
    P: PresentationPort,
    S: PreferenceStore,
    T: Transport,
    C: Timer,
{
    let clear_after = {
        let mut page = page.borrow_mut();
        if let Err(reason) = page.begin_submission(&message) {
            return SubmitOutcome::Rejected(reason);
        }
        page.config().submit.status_clear()
    };

    let result = transport.send(&message).await;
    let outcome = match &result {
        Ok(()) => SubmitOutcome::Sent,
        Err(err) => SubmitOutcome::Failed(err.clone()),
    };

    let generation = page.borrow_mut().complete_submission(result);
    if let Some(generation) = generation {
        timer.sleep(clear_after).await;
        page.borrow_mut().expire_status(generation);
    }
    outcome
}
