//! Required-field validation rules.
//!
//! # Design
//! - Presence-only: a field passes when its trimmed value is non-empty.
//! - Every field is visited and re-marked on each pass so stale markers clear themselves.

/// A form control that can be checked for presence and flagged invalid.
pub trait RequiredField {
    /// Current value of the control.
    fn current_value(&self) -> String;
    /// Add or remove the invalid marker.
    fn mark_invalid(&self, invalid: bool);
}

/// Outcome of a validation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Number of required fields inspected.
    pub checked: usize,
    /// Number of fields flagged invalid.
    pub invalid: usize,
}

impl ValidationReport {
    /// True when no inspected field was flagged.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.invalid == 0
    }
}

/// True when a value counts as missing.
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Check every field, updating its marker, and report the result.
#[must_use]
pub fn validate_required<F, I>(fields: I) -> ValidationReport
where
    F: RequiredField,
    I: IntoIterator<Item = F>,
{
    let mut report = ValidationReport::default();
    for field in fields {
        report.checked += 1;
        let blank = is_blank(&field.current_value());
        field.mark_invalid(blank);
        if blank {
            report.invalid += 1;
        }
    }
    report
}

/// Submit event that can be stopped before the browser acts on it.
pub trait CancellableEvent {
    /// Cancel the default action.
    fn prevent_default(&self);
    /// Keep the event away from other listeners.
    fn stop_propagation(&self);
}

/// Validate `fields` and cancel `event` when any of them is blank.
#[must_use]
pub fn guard_submit<F, I, E>(fields: I, event: &E) -> ValidationReport
where
    F: RequiredField,
    I: IntoIterator<Item = F>,
    E: CancellableEvent + ?Sized,
{
    let report = validate_required(fields);
    if !report.is_valid() {
        event.prevent_default();
        event.stop_propagation();
    }
    report
}

#[cfg(test)]
mod tests {
    use super::{
        CancellableEvent, RequiredField, ValidationReport, guard_submit, is_blank,
        validate_required,
    };
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct SubmitEvent {
        calls: RefCell<Vec<&'static str>>,
    }

    impl CancellableEvent for SubmitEvent {
        fn prevent_default(&self) {
            self.calls.borrow_mut().push("preventDefault");
        }

        fn stop_propagation(&self) {
            self.calls.borrow_mut().push("stopPropagation");
        }
    }

    struct FakeField {
        value: &'static str,
        invalid: Cell<bool>,
    }

    impl FakeField {
        fn new(value: &'static str) -> Self {
            Self {
                value,
                invalid: Cell::new(false),
            }
        }
    }

    impl RequiredField for &FakeField {
        fn current_value(&self) -> String {
            self.value.to_string()
        }

        fn mark_invalid(&self, invalid: bool) {
            self.invalid.set(invalid);
        }
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\n"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn empty_field_fails_and_is_marked() {
        let fields = [FakeField::new("alice"), FakeField::new("   ")];
        let report = validate_required(fields.iter());
        assert!(!report.is_valid());
        assert_eq!(report, ValidationReport { checked: 2, invalid: 1 });
        assert!(!fields[0].invalid.get());
        assert!(fields[1].invalid.get());
    }

    #[test]
    fn all_filled_passes_and_clears_previous_markers() {
        let fields = [FakeField::new("alice"), FakeField::new("secret")];
        fields[1].invalid.set(true);
        let report = validate_required(fields.iter());
        assert!(report.is_valid());
        assert!(fields.iter().all(|field| !field.invalid.get()));
    }

    #[test]
    fn every_field_is_visited_after_a_failure() {
        let fields = [FakeField::new(""), FakeField::new(""), FakeField::new("x")];
        let report = validate_required(fields.iter());
        assert_eq!(report.checked, 3);
        assert_eq!(report.invalid, 2);
        assert!(fields[1].invalid.get());
    }

    #[test]
    fn no_required_fields_is_valid() {
        let fields: [FakeField; 0] = [];
        assert!(validate_required(fields.iter()).is_valid());
    }

    #[test]
    fn invalid_submit_is_cancelled() {
        let fields = [FakeField::new("alice"), FakeField::new("")];
        let event = SubmitEvent::default();

        let report = guard_submit(fields.iter(), &event);

        assert_eq!(report.invalid, 1);
        assert_eq!(*event.calls.borrow(), vec!["preventDefault", "stopPropagation"]);
        assert!(fields[1].invalid.get());
    }

    #[test]
    fn valid_submit_goes_through() {
        let fields = [FakeField::new("alice"), FakeField::new("secret")];
        let event = SubmitEvent::default();

        assert!(guard_submit(fields.iter(), &event).is_valid());
        assert!(event.calls.borrow().is_empty());
    }
}
