//! The page: state, dispatcher, and the surfaces they act on.
//!
//! Hosts build one [`Page`], call [`Page::init`] once the document is
//! ready, and forward events to [`Page::handle`]. Submission is async and
//! goes through [`crate::submit::run`] instead.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::config::PageConfig;
use crate::dispatch::{Dispatcher, HandlerContext, PageEvent};
use crate::error::{SubmitError, SubmitRejected};
use crate::form::ContactMessage;
use crate::port::{Action, PresentationPort};
use crate::state::{PageElements, PageState};
use crate::store::PreferenceStore;
use crate::theme;

pub struct Page<P, S> {
    state: PageState,
    dispatcher: Dispatcher,
    port: P,
    store: S,
    config: PageConfig,
}

impl<P: PresentationPort, S: PreferenceStore> Page<P, S> {
    pub fn new(port: P, store: S, elements: PageElements, config: PageConfig) -> Self {
        Self::with_dispatcher(port, store, elements, config, Dispatcher::standard())
    }

    pub fn with_dispatcher(port: P, store: S, elements: PageElements, config: PageConfig, dispatcher: Dispatcher) -> Self {
        Self { state: PageState::new(elements), dispatcher, port, store, config }
    }

    /// Apply the stored theme and bring scroll-derived state up to date.
    pub fn init(&mut self) {
        self.state.theme = theme::initial_theme(&self.store);
        tracing::debug!(theme = self.state.theme.as_str(), "page init");
        let actions = theme::apply_theme(self.state.theme);
        self.port.apply_all(&actions);
        self.handle(&PageEvent::Load);
    }

    /// Dispatch one event and apply the resulting actions.
    pub fn handle(&mut self, event: &PageEvent) -> Vec<Action> {
        let mut ctx = HandlerContext {
            state: &mut self.state,
            layout: &self.port,
            store: &mut self.store,
            config: &self.config,
        };
        let actions = self.dispatcher.dispatch(&mut ctx, event);
        self.port.apply_all(&actions);
        actions
    }

    /// Validate and, if valid, enter the pending state.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitRejected`] when a submission is already pending or
    /// the form is invalid. Field errors are on screen in the latter case.
    pub fn begin_submission(&mut self, message: &ContactMessage) -> Result<(), SubmitRejected> {
        let (result, actions) = self.state.submission.begin(&mut self.state.form, message);
        self.port.apply_all(&actions);
        result
    }

    /// Apply the transport result. Returns the success generation, if any.
    pub fn complete_submission(&mut self, result: Result<(), SubmitError>) -> Option<u64> {
        let (generation, actions) = self.state.submission.complete(&mut self.state.form, result);
        self.port.apply_all(&actions);
        generation
    }

    /// Clear the success status of `generation` if it is still current.
    pub fn expire_status(&mut self, generation: u64) {
        let actions = self.state.submission.expire(generation);
        self.port.apply_all(&actions);
    }

    #[must_use]
    pub fn state(&self) -> &PageState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    #[must_use]
    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
