//! Page-ready wiring: widgets plus submit-time validation for every form.

use super::widgets::{self, WidgetKind};
use super::{UiContext, forms};
use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{DocumentReadyState, Element};

/// Initialise the page once the document is parsed.
pub(crate) fn on_ready(ctx: &UiContext) {
    if ctx.document().ready_state() == DocumentReadyState::Loading {
        let ready = ctx.clone();
        EventListener::once(ctx.document(), "DOMContentLoaded", move |_| {
            initialise(&ready);
        })
        .forget();
    } else {
        initialise(ctx);
    }
}

fn initialise(ctx: &UiContext) {
    if !ctx.mark_booted() {
        return;
    }
    let document = ctx.document();
    let config = ctx.config();
    let tooltips = widgets::activate(
        document,
        &config.widgets.tooltip_selector,
        WidgetKind::Tooltip,
    );
    let popovers = widgets::activate(
        document,
        &config.widgets.popover_selector,
        WidgetKind::Popover,
    );
    let forms = intercept_forms(ctx);
    console::debug!("page utilities ready", tooltips, popovers, forms);
}

fn intercept_forms(ctx: &UiContext) -> usize {
    let nodes = match ctx.document().query_selector_all("form") {
        Ok(nodes) => nodes,
        Err(err) => {
            console::error!("form lookup failed", err);
            return 0;
        }
    };
    let mut attached = 0;
    for index in 0..nodes.length() {
        let Some(form) = nodes
            .get(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let listener_ctx = ctx.clone();
        let target = form.clone();
        // gloo listeners are passive by default; submit must be cancellable.
        EventListener::new_with_options(
            &form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| forms::guard_form_submit(&listener_ctx, &target, event),
        )
        .forget();
        attached += 1;
    }
    attached
}
