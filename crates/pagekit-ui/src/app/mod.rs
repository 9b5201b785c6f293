//! Browser glue binding the core rules to the live document.
//!
//! # Design
//! - One [`UiContext`] per page carries config, document and spinner state.
//! - Config is read from the page lazily, so a module started from `<head>` still sees a later config block.
//! - Rust callers pass the context explicitly; JS callers share one thread-local instance.
//! - DOM failures are logged and the operation degrades instead of throwing.

use crate::core::config::{CONFIG_ELEMENT_ID, ConfigCell, UiConfig};
use crate::core::fetch::Feedback;
use crate::core::flash::FlashMessage;
use crate::core::spinner::Spinner;
use gloo::console;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::{Document, DocumentReadyState, Element};

pub(crate) mod bootstrap;
pub(crate) mod debounce;
pub(crate) mod flash;
pub(crate) mod forms;
mod preferences;
pub(crate) mod spinner;
pub(crate) mod theme;
mod widgets;

thread_local! {
    static SHARED: RefCell<Option<UiContext>> = const { RefCell::new(None) };
}

/// Wire page-ready behaviour (widgets and form interception) for the current document.
///
/// # Errors
///
/// Returns an error when no document is available.
pub fn run_page() -> Result<(), JsValue> {
    let ctx = shared_context()?;
    bootstrap::on_ready(&ctx);
    Ok(())
}

/// Page-wide UI state shared by the utilities.
#[derive(Clone)]
pub(crate) struct UiContext {
    inner: Rc<UiInner>,
}

struct UiInner {
    config: ConfigCell,
    document: Document,
    spinner: RefCell<Spinner<Element>>,
    booted: Cell<bool>,
}

impl UiContext {
    fn new(document: Document) -> Self {
        Self {
            inner: Rc::new(UiInner {
                config: ConfigCell::default(),
                document,
                spinner: RefCell::new(Spinner::default()),
                booted: Cell::new(false),
            }),
        }
    }

    /// Build a context for the current document.
    fn from_page() -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("document unavailable"))?;
        Ok(Self::new(document))
    }

    /// Page config; re-read from the inline block until the document is parsed.
    pub(crate) fn config(&self) -> Rc<UiConfig> {
        let document = &self.inner.document;
        let parsed = document.ready_state() != DocumentReadyState::Loading;
        self.inner.config.get(parsed, || page_config(document))
    }

    pub(crate) fn document(&self) -> &Document {
        &self.inner.document
    }

    pub(crate) fn spinner(&self) -> &RefCell<Spinner<Element>> {
        &self.inner.spinner
    }

    /// Flip the boot flag; returns false if the page was already booted.
    pub(crate) fn mark_booted(&self) -> bool {
        !self.inner.booted.replace(true)
    }
}

impl Feedback for UiContext {
    fn show_spinner(&self) {
        spinner::show(self);
    }

    fn hide_spinner(&self) {
        spinner::hide(self);
    }

    fn flash(&self, message: FlashMessage) {
        flash::render(self, &message);
    }

    fn flash_timeout_ms(&self) -> u32 {
        self.config().flash.timeout_ms
    }
}

/// Context shared by the JS entry points, created on first use.
pub(crate) fn shared_context() -> Result<UiContext, JsValue> {
    SHARED.with(|slot| {
        let existing = slot.borrow().clone();
        if let Some(ctx) = existing {
            return Ok(ctx);
        }
        let ctx = UiContext::from_page()?;
        *slot.borrow_mut() = Some(ctx.clone());
        Ok(ctx)
    })
}

fn page_config(document: &Document) -> UiConfig {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return UiConfig::default();
    };
    let raw = element.text_content().unwrap_or_default();
    match UiConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            console::error!("invalid page config, using defaults", err.to_string());
            UiConfig::default()
        }
    }
}
