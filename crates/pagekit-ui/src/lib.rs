#![cfg_attr(not(target_arch = "wasm32"), forbid(unsafe_code))]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::redundant_pub_crate)]
//! Pagekit browser UI utilities.
//!
//! The DOM-free [`core`] modules hold every rule (theme names, flash styling,
//! required-field checks, password scoring, spinner counting, debouncing and
//! the fetch pipeline) and compile on native targets for testing. The wasm-only
//! layers bind those rules to the live document and expose them to page
//! markup through `wasm-bindgen`.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
pub mod bindings;
#[cfg(target_arch = "wasm32")]
mod services;

#[cfg(target_arch = "wasm32")]
pub use app::run_page;
