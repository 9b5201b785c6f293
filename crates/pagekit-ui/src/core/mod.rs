//! Core, DOM-free primitives and helpers for the page utilities.
pub mod config;
pub mod debounce;
pub mod fetch;
pub mod flash;
pub mod forms;
pub mod password;
pub mod spinner;
pub mod theme;

#[cfg(test)]
pub(crate) mod testing;
