//! Network services backed by the browser `fetch` API.
pub(crate) mod api;
