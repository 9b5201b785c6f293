//! Bootstrap tooltip and popover activation.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Tooltip;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap, js_class = "Tooltip")]
    fn new(element: &Element) -> Result<Tooltip, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Popover;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap, js_class = "Popover")]
    fn new(element: &Element) -> Result<Popover, JsValue>;
}

/// Widget family activated on page-ready.
#[derive(Clone, Copy, Debug)]
pub(super) enum WidgetKind {
    Tooltip,
    Popover,
}

impl WidgetKind {
    const fn label(self) -> &'static str {
        match self {
            Self::Tooltip => "tooltip",
            Self::Popover => "popover",
        }
    }

    fn construct(self, element: &Element) -> Result<(), JsValue> {
        match self {
            Self::Tooltip => Tooltip::new(element).map(drop),
            Self::Popover => Popover::new(element).map(drop),
        }
    }
}

/// Attach `kind` to every element matching `selector`; returns how many were activated.
///
/// The first constructor failure (typically a page without Bootstrap's JS)
/// is logged once and stops the pass.
pub(super) fn activate(document: &Document, selector: &str, kind: WidgetKind) -> usize {
    let nodes = match document.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(err) => {
            gloo::console::error!("widget lookup failed", kind.label(), err);
            return 0;
        }
    };
    let mut activated = 0;
    for index in 0..nodes.length() {
        let Some(element) = nodes
            .get(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        if let Err(err) = kind.construct(&element) {
            gloo::console::warn!("widget activation skipped", kind.label(), err);
            break;
        }
        activated += 1;
    }
    activated
}
