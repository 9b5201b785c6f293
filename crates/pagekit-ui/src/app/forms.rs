//! Required-field validation against live form elements.

use super::UiContext;
use crate::core::config::FormSettings;
use crate::core::forms::{
    CancellableEvent, RequiredField, ValidationReport, guard_submit, validate_required,
};
use gloo::console;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

struct FieldHandle<'a> {
    element: Element,
    invalid_class: &'a str,
}

impl RequiredField for FieldHandle<'_> {
    fn current_value(&self) -> String {
        if let Some(input) = self.element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = self.element.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else if let Some(area) = self.element.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            self.element.get_attribute("value").unwrap_or_default()
        }
    }

    fn mark_invalid(&self, invalid: bool) {
        if let Err(err) = self
            .element
            .class_list()
            .toggle_with_force(self.invalid_class, invalid)
        {
            console::error!("invalid marker update failed", err);
        }
    }
}

impl CancellableEvent for Event {
    fn prevent_default(&self) {
        Self::prevent_default(self);
    }

    fn stop_propagation(&self) {
        Self::stop_propagation(self);
    }
}

/// Check every required field under `form`; true when all are filled.
///
/// A selector failure is logged and lets the form through, leaving the
/// decision to server-side validation.
pub(crate) fn validate_form(ctx: &UiContext, form: &Element) -> bool {
    let config = ctx.config();
    let Some(fields) = required_fields(&config.forms, form) else {
        return true;
    };
    log_outcome(&validate_required(fields))
}

/// Submit listener body: cancel `event` when a required field under `form` is blank.
pub(crate) fn guard_form_submit(ctx: &UiContext, form: &Element, event: &Event) {
    let config = ctx.config();
    if let Some(fields) = required_fields(&config.forms, form) {
        log_outcome(&guard_submit(fields, event));
    }
}

fn required_fields<'a>(
    settings: &'a FormSettings,
    form: &Element,
) -> Option<Vec<FieldHandle<'a>>> {
    let nodes = match form.query_selector_all(&settings.required_selector) {
        Ok(nodes) => nodes,
        Err(err) => {
            console::error!("required field lookup failed", err);
            return None;
        }
    };
    Some(
        (0..nodes.length())
            .filter_map(|index| nodes.get(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|element| FieldHandle {
                element,
                invalid_class: &settings.invalid_class,
            })
            .collect(),
    )
}

fn log_outcome(report: &ValidationReport) -> bool {
    if !report.is_valid() {
        console::debug!("form blocked", report.invalid, report.checked);
    }
    report.is_valid()
}
