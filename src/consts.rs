//! Shared constants for the portfolio page core.

// ── Scroll thresholds ───────────────────────────────────────────

/// Scroll offset past which the navbar takes its compact "scrolled" look.
pub const NAVBAR_SCROLLED_PX: f64 = 50.0;

/// Scroll offset past which the back-to-top control becomes visible.
pub const BACK_TO_TOP_PX: f64 = 500.0;

/// Look-ahead added to the scroll offset when picking the active section.
pub const ACTIVE_SECTION_OFFSET_PX: f64 = 100.0;

/// Distance above the viewport bottom an element must cross to be revealed.
pub const REVEAL_OFFSET_PX: f64 = 100.0;

/// Distance above the viewport bottom a skill bar must cross to animate.
pub const SKILL_BAR_OFFSET_PX: f64 = 50.0;

// ── Navigation ──────────────────────────────────────────────────

/// Widths above this close the mobile menu on resize.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// ── Timing ──────────────────────────────────────────────────────

/// Latency of the simulated contact-form transport.
pub const SUBMIT_LATENCY_MS: u64 = 1500;

/// How long the success status stays up before clearing.
pub const STATUS_CLEAR_MS: u64 = 5000;

/// Delay of the extra reveal pass after `load`.
pub const LOAD_REVEAL_DELAY_MS: u64 = 100;

/// Delay of the extra skill-bar pass after `load`.
pub const LOAD_SKILL_BAR_DELAY_MS: u64 = 300;

/// Per-character delay of the typewriter effect.
pub const TYPEWRITER_SPEED_MS: u64 = 100;

// ── Storage ─────────────────────────────────────────────────────

/// Preference key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

// ── Copy ────────────────────────────────────────────────────────

pub const SUBMIT_IDLE_LABEL: &str = "Send Message";
pub const SUBMIT_BUSY_LABEL: &str = "Sending...";
pub const SUBMIT_SUCCESS_TEXT: &str = "Thank you! Your message has been sent successfully.";
pub const SUBMIT_FAILURE_TEXT: &str = "Sorry, your message could not be sent. Please try again.";
