//! Flash message rendering.
//!
//! Each notice is an independent node: no queue, no dedup. The text is inserted
//! as a text node and the close button works with or without Bootstrap's JS.

use super::UiContext;
use super::debounce::TimeoutScheduler;
use crate::core::flash::{FlashMessage, NoticeHost, post_notice};
use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

/// Render `message`, logging instead of failing when the document cannot take it.
pub(crate) fn render(ctx: &UiContext, message: &FlashMessage) {
    let host = PageNotices {
        document: ctx.document(),
    };
    post_notice(&host, &TimeoutScheduler, message);
}

struct PageNotices<'a> {
    document: &'a Document,
}

/// A notice in the page plus the listener behind its close button.
struct LiveNotice {
    element: Element,
    _dismiss: EventListener,
}

impl NoticeHost for PageNotices<'_> {
    type Notice = LiveNotice;

    fn insert(&self, message: &FlashMessage) -> Option<LiveNotice> {
        match self.try_insert(message) {
            Ok(notice) => Some(notice),
            Err(err) => {
                console::error!("flash message render failed", message.text.as_str(), err);
                None
            }
        }
    }

    fn remove(notice: &LiveNotice) {
        notice.element.remove();
    }
}

impl PageNotices<'_> {
    fn try_insert(&self, message: &FlashMessage) -> Result<LiveNotice, JsValue> {
        let document = self.document;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;

        let element = document.create_element("div")?;
        element.set_class_name(&message.class_names());
        element.set_attribute("role", "alert")?;
        element.append_child(&document.create_text_node(&message.text))?;

        let close = document.create_element("button")?;
        close.set_attribute("type", "button")?;
        close.set_class_name("btn-close");
        close.set_attribute("data-bs-dismiss", "alert")?;
        close.set_attribute("aria-label", "Close")?;
        element.append_child(&close)?;

        body.append_child(&element)?;

        let dismiss = {
            let element = element.clone();
            EventListener::once(&close, "click", move |_| element.remove())
        };
        Ok(LiveNotice {
            element,
            _dismiss: dismiss,
        })
    }
}
