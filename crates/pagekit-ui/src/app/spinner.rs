//! Loading indicator element driven by the shared spinner state.

use super::UiContext;
use crate::core::spinner::IndicatorHost;
use gloo::console;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

pub(crate) fn show(ctx: &UiContext) {
    let config = ctx.config();
    let host = PageIndicator {
        document: ctx.document(),
        class: &config.spinner.class,
    };
    ctx.spinner().borrow_mut().show(&host);
}

pub(crate) fn hide(ctx: &UiContext) {
    let config = ctx.config();
    let host = PageIndicator {
        document: ctx.document(),
        class: &config.spinner.class,
    };
    ctx.spinner().borrow_mut().hide(&host);
}

struct PageIndicator<'a> {
    document: &'a Document,
    class: &'a str,
}

impl PageIndicator<'_> {
    fn try_insert(&self) -> Result<Element, JsValue> {
        let body = self
            .document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        let indicator = self.document.create_element("div")?;
        indicator.set_class_name(self.class);
        indicator.set_attribute("role", "status")?;
        indicator.set_attribute("aria-live", "polite")?;
        body.append_child(&indicator)?;
        Ok(indicator)
    }
}

impl IndicatorHost for PageIndicator<'_> {
    type Indicator = Element;

    fn insert(&self) -> Option<Element> {
        self.try_insert()
            .map_err(|err| console::error!("spinner update failed", err))
            .ok()
    }

    fn remove(&self, indicator: Element) {
        indicator.remove();
    }
}
