use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::config::PageConfig;
use crate::form::FieldId;
use crate::port::{MemoryPort, Viewport};
use crate::state::PageElements;
use crate::store::MemoryStore;

struct TokioTimer;

impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

struct FailingTransport;

impl Transport for FailingTransport {
    async fn send(&self, _message: &ContactMessage) -> Result<(), SubmitError> {
        Err(SubmitError::Transport("offline".into()))
    }
}

fn valid() -> ContactMessage {
    ContactMessage {
        name: "Jo".into(),
        email: "jo@x.com".into(),
        subject: "Hi!".into(),
        message: "1234567890".into(),
    }
}

fn page() -> Page<MemoryPort, MemoryStore> {
    let port = MemoryPort::new(Viewport { width: 1280.0, height: 800.0, scroll_y: 0.0 });
    Page::new(port, MemoryStore::new(), PageElements::default(), PageConfig::default())
}

// =============================================================
// Submission state machine
// =============================================================

#[test]
fn begin_with_valid_form_enters_pending_and_disables_button() {
    let mut sub = Submission::default();
    let mut form = FormState::default();
    let (result, actions) = sub.begin(&mut form, &valid());
    assert_eq!(result, Ok(()));
    assert_eq!(sub.state(), SubmissionState::Pending);
    assert!(actions.contains(&Action::flag(ElementRef::SubmitButton, Flag::Disabled, true)));
    assert!(actions.contains(&Action::SetIcon { element: ElementRef::SubmitButton, icon: Icon::Spinner }));
    assert!(actions.contains(&Action::text(ElementRef::SubmitButton, "Sending...")));
}

#[test]
fn begin_with_invalid_form_stays_idle_and_shows_errors() {
    let mut sub = Submission::default();
    let mut form = FormState::default();
    let message = ContactMessage { name: "J".into(), ..valid() };
    let (result, actions) = sub.begin(&mut form, &message);
    assert_eq!(result, Err(SubmitRejected::Invalid(1)));
    assert_eq!(sub.state(), SubmissionState::Idle);
    assert!(actions.contains(&Action::text(
        ElementRef::FieldError(FieldId::Name),
        "Please enter a valid name (at least 2 characters)"
    )));
    assert!(!actions.iter().any(|a| matches!(a, Action::ResetForm)));
}

#[test]
fn begin_while_pending_has_no_effect() {
    let mut sub = Submission::default();
    let mut form = FormState::default();
    sub.begin(&mut form, &valid()).0.unwrap();
    let (result, actions) = sub.begin(&mut form, &valid());
    assert_eq!(result, Err(SubmitRejected::Pending));
    assert!(actions.is_empty());
    assert_eq!(sub.state(), SubmissionState::Pending);
}

#[test]
fn complete_ok_resets_form_and_restores_button() {
    let mut sub = Submission::default();
    let mut form = FormState::default();
    sub.begin(&mut form, &valid()).0.unwrap();
    let (generation, actions) = sub.complete(&mut form, Ok(()));
    assert_eq!(generation, Some(1));
    assert_eq!(sub.state(), SubmissionState::Success);
    assert!(actions.contains(&Action::ResetForm));
    assert!(actions.contains(&Action::text(
        ElementRef::FormStatus,
        "Thank you! Your message has been sent successfully."
    )));
    assert!(actions.contains(&Action::flag(ElementRef::SubmitButton, Flag::Disabled, false)));
    assert!(actions.contains(&Action::text(ElementRef::SubmitButton, "Send Message")));
}

#[test]
fn complete_err_keeps_form_and_returns_to_idle() {
    let mut sub = Submission::default();
    let mut form = FormState::default();
    sub.begin(&mut form, &valid()).0.unwrap();
    let (generation, actions) = sub.complete(&mut form, Err(SubmitError::Transport("down".into())));
    assert_eq!(generation, None);
    assert_eq!(sub.state(), SubmissionState::Idle);
    assert!(!actions.contains(&Action::ResetForm));
    assert!(actions.contains(&Action::flag(ElementRef::FormStatus, Flag::Error, true)));
    assert!(actions.contains(&Action::flag(ElementRef::SubmitButton, Flag::Disabled, false)));
}

#[test]
fn complete_without_pending_is_ignored() {
    let mut sub = Submission::default();
    let mut form = FormState::default();
    let (generation, actions) = sub.complete(&mut form, Ok(()));
    assert_eq!(generation, None);
    assert!(actions.is_empty());
    assert_eq!(sub.state(), SubmissionState::Idle);
}

#[test]
fn stale_expire_does_not_clear_newer_success() {
    let mut sub = Submission::default();
    let mut form = FormState::default();
    sub.begin(&mut form, &valid()).0.unwrap();
    let first = sub.complete(&mut form, Ok(())).0.unwrap();
    sub.begin(&mut form, &valid()).0.unwrap();
    let second = sub.complete(&mut form, Ok(())).0.unwrap();
    assert_ne!(first, second);

    assert!(sub.expire(first).is_empty());
    assert_eq!(sub.state(), SubmissionState::Success);

    assert_eq!(sub.expire(second), vec![Action::flag(ElementRef::FormStatus, Flag::Success, false)]);
    assert_eq!(sub.state(), SubmissionState::Idle);
}

// =============================================================
// run (async driver)
// =============================================================

#[tokio::test(start_paused = true)]
async fn run_sends_after_latency_and_clears_status_later() {
    let page = RefCell::new(page());
    let transport = SimulatedTransport::new(TokioTimer, Duration::from_millis(1500));
    let started = tokio::time::Instant::now();

    let outcome = run(&page, valid(), &transport, &TokioTimer).await;

    assert_eq!(outcome, SubmitOutcome::Sent);
    assert_eq!(started.elapsed(), Duration::from_millis(6500));
    let page = page.into_inner();
    assert_eq!(page.state().submission.state(), SubmissionState::Idle);
    assert!(!page.port().flag(&ElementRef::FormStatus, Flag::Success));
    assert!(page.port().applied.contains(&Action::ResetForm));
}

#[tokio::test(start_paused = true)]
async fn run_rejects_invalid_form_without_waiting() {
    let page = RefCell::new(page());
    let transport = SimulatedTransport::new(TokioTimer, Duration::from_millis(1500));
    let started = tokio::time::Instant::now();

    let outcome = run(&page, ContactMessage::default(), &transport, &TokioTimer).await;

    assert_eq!(outcome, SubmitOutcome::Rejected(SubmitRejected::Invalid(4)));
    assert_eq!(started.elapsed(), Duration::ZERO);
    assert!(page.borrow().port().flag(&ElementRef::Field(FieldId::Email), Flag::Error));
}

#[tokio::test(start_paused = true)]
async fn run_failure_skips_status_timer() {
    let page = RefCell::new(page());
    let started = tokio::time::Instant::now();

    let outcome = run(&page, valid(), &FailingTransport, &TokioTimer).await;

    assert_eq!(outcome, SubmitOutcome::Failed(SubmitError::Transport("offline".into())));
    assert_eq!(started.elapsed(), Duration::ZERO);
    let page = page.into_inner();
    assert_eq!(page.state().submission.state(), SubmissionState::Idle);
    assert!(!page.port().applied.contains(&Action::ResetForm));
    assert_eq!(
        page.port().text(&ElementRef::FormStatus),
        "Sorry, your message could not be sent. Please try again."
    );
}

#[tokio::test(start_paused = true)]
async fn second_run_while_first_is_in_flight_is_rejected() {
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let page = Rc::new(RefCell::new(page()));
            let first = {
                let page = Rc::clone(&page);
                tokio::task::spawn_local(async move {
                    let transport = SimulatedTransport::new(TokioTimer, Duration::from_millis(1500));
                    run(&*page, valid(), &transport, &TokioTimer).await
                })
            };
            tokio::task::yield_now().await;
            assert_eq!(page.borrow().state().submission.state(), SubmissionState::Pending);

            let transport = SimulatedTransport::new(TokioTimer, Duration::from_millis(1500));
            let second = run(&*page, valid(), &transport, &TokioTimer).await;
            assert_eq!(second, SubmitOutcome::Rejected(SubmitRejected::Pending));

            assert_eq!(first.await.unwrap(), SubmitOutcome::Sent);
        })
        .await;
}
