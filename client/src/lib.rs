//! Browser host for the portfolio page.
//!
//! Compiled to WebAssembly with the `hydrate` feature. On start it finds
//! the page's sections, reveal targets, and skill bars, wires DOM listeners
//! to `portfolio::page::Page`, and applies the resulting actions to the
//! live document. Without `hydrate` only the markup contract in
//! [`selectors`] is built, which keeps native test runs browser-free.

pub mod selectors;

#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod storage;
#[cfg(feature = "hydrate")]
pub mod timer;
#[cfg(feature = "hydrate")]
mod wiring;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }
    wiring::mount();
}
