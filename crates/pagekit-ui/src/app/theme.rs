//! Theme stylesheet swapping against the live `<head>`.

use super::UiContext;
use super::preferences::LocalThemeStore;
use crate::core::theme::{
    StylesheetHost, StylesheetOutcome, StylesheetSwap, ThemeError, ThemeName, stored_theme,
    switch_theme,
};
use gloo::console;
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlLinkElement};

/// Switch to `raw` and remember it for future page loads.
pub(crate) fn set_theme(ctx: &UiContext, raw: &str) -> Result<ThemeName, ThemeError> {
    let config = ctx.config();
    let host = PageStylesheets {
        document: ctx.document(),
    };
    switch_theme(&config.theme, &host, &LocalThemeStore, raw)
}

/// Stored preference, or the configured default.
pub(crate) fn load_theme(ctx: &UiContext) -> ThemeName {
    stored_theme(&ctx.config().theme, &LocalThemeStore)
}

struct PageStylesheets<'a> {
    document: &'a Document,
}

/// Swap in flight plus both settle listeners; whichever fires first drops the other.
struct PendingSwap {
    swap: StylesheetSwap<Element>,
    _listeners: [EventListener; 2],
}

type SwapSlot = Rc<RefCell<Option<PendingSwap>>>;

impl StylesheetHost for PageStylesheets<'_> {
    type Link = Element;

    fn theme_links(&self, link_id: &str) -> Vec<Element> {
        let nodes = match self
            .document
            .query_selector_all(&format!("link[id=\"{link_id}\"]"))
        {
            Ok(nodes) => nodes,
            Err(err) => {
                console::error!("theme link lookup failed", err);
                return Vec::new();
            }
        };
        (0..nodes.length())
            .filter_map(|index| nodes.get(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn create_link(&self, link_id: &str, href: &str) -> Option<Element> {
        let link = self
            .document
            .create_element("link")
            .and_then(|element| element.dyn_into::<HtmlLinkElement>().map_err(JsValue::from));
        match link {
            Ok(link) => {
                link.set_rel("stylesheet");
                link.set_id(link_id);
                link.set_href(href);
                Some(link.into())
            }
            Err(err) => {
                console::error!("theme link creation failed", href, err);
                None
            }
        }
    }

    fn attach(&self, swap: StylesheetSwap<Element>) {
        let incoming = swap.incoming().clone();
        let slot = SwapSlot::default();
        let listeners = [
            settle_on(&incoming, "load", &slot, StylesheetOutcome::Loaded),
            settle_on(&incoming, "error", &slot, StylesheetOutcome::Failed),
        ];
        *slot.borrow_mut() = Some(PendingSwap {
            swap,
            _listeners: listeners,
        });

        let appended = self
            .document
            .head()
            .ok_or_else(|| JsValue::from_str("document has no head"))
            .and_then(|head| head.append_child(&incoming));
        if let Err(err) = appended {
            console::error!("theme stylesheet swap failed", err);
            slot.borrow_mut().take();
        }
    }
}

fn settle_on(
    link: &Element,
    event: &'static str,
    slot: &SwapSlot,
    outcome: StylesheetOutcome,
) -> EventListener {
    let slot = Rc::clone(slot);
    EventListener::once(link, event, move |_| settle(&slot, outcome))
}

fn settle(slot: &SwapSlot, outcome: StylesheetOutcome) {
    let Some(pending) = slot.borrow_mut().take() else {
        return;
    };
    if outcome == StylesheetOutcome::Failed {
        let href = pending.swap.incoming().get_attribute("href");
        console::error!("theme stylesheet failed to load", href.unwrap_or_default());
    }
    for link in pending.swap.settle(outcome) {
        link.remove();
    }
}
