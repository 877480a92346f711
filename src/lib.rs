//! Interactivity layer for a static portfolio page.
//!
//! This crate holds the page logic and nothing browser-specific: theme
//! selection, scroll-derived navigation state, reveal animations, the
//! mobile menu, and contact-form validation and submission. The host
//! (`portfolio-client`, compiled to WebAssembly) measures the document,
//! forwards events, and applies the [`port::Action`]s this crate returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | Top-level [`page::Page`] driven by the host |
//! | [`dispatch`] | Event kinds, handler subscriptions, standard wiring |
//! | [`state`] | Page state snapshot shared by handlers |
//! | [`port`] | Presentation port, layout queries, actions |
//! | [`scroll`] | Navbar/back-to-top flags, active section, reveal latches |
//! | [`nav`] | Mobile menu and in-page anchor scrolling |
//! | [`form`] | Contact form field rules |
//! | [`submit`] | Submission state machine and async driver |
//! | [`theme`] | Light/dark theme and its persisted preference |
//! | [`store`] | Preference store trait and in-memory store |
//! | [`typewriter`] | Hero title typing effect |
//! | [`timer`] | Host-provided async delays |
//! | [`config`] | Thresholds and timings, JSON-configurable |
//! | [`error`] | Error types |
//! | [`consts`] | Default thresholds, delays, and copy |

pub mod config;
pub mod consts;
pub mod dispatch;
pub mod error;
pub mod form;
pub mod nav;
pub mod page;
pub mod port;
pub mod scroll;
pub mod state;
pub mod store;
pub mod submit;
pub mod theme;
pub mod timer;
pub mod typewriter;
