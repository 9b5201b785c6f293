//! Page configuration for the UI utilities.
//!
//! # Design
//! - Every section defaults to the markup contract the server templates ship with.
//! - Pages override individual fields through an inline JSON block with `camelCase` keys; missing keys keep defaults.
//! - The block is re-read until the document has finished parsing, then cached.

use crate::core::flash::FlashMessage;
use crate::core::password::{DEFAULT_MIN_LENGTH, PasswordPolicy};
use serde::Deserialize;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use thiserror::Error;

/// Element id of the optional inline JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "pagekit-config";

/// Errors raised while loading page configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration payload was not valid JSON for [`UiConfig`].
    #[error("invalid page configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field held a value that cannot be used.
    #[error("invalid configuration field {section}.{field}: {reason}")]
    InvalidField {
        /// Section containing the field.
        section: &'static str,
        /// Field that failed validation.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

/// Full configuration for the page utilities.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct UiConfig {
    /// Theme stylesheet and persistence settings.
    pub theme: ThemeSettings,
    /// Flash message defaults.
    pub flash: FlashSettings,
    /// Loading indicator settings.
    pub spinner: SpinnerSettings,
    /// Form validation settings.
    pub forms: FormSettings,
    /// Password strength policy.
    pub password: PasswordSettings,
    /// Fetch wrapper settings.
    pub api: ApiSettings,
    /// Tooltip/popover trigger selectors.
    pub widgets: WidgetSettings,
}

/// Theme stylesheet settings.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeSettings {
    /// `localStorage` key holding the theme preference.
    pub storage_key: String,
    /// Element id shared by theme `<link>` elements.
    pub link_id: String,
    /// Prefix prepended to the theme name to build the stylesheet URL.
    pub href_prefix: String,
    /// Suffix appended to the theme name to build the stylesheet URL.
    pub href_suffix: String,
    /// Theme applied when no valid preference is stored.
    pub default: String,
    /// Allowed theme names; empty accepts any well-formed name.
    pub available: Vec<String>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            link_id: "theme-css".to_string(),
            href_prefix: "/static/css/themes/".to_string(),
            href_suffix: ".css".to_string(),
            default: "light".to_string(),
            available: Vec::new(),
        }
    }
}

/// Flash message settings.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct FlashSettings {
    /// Lifetime applied when the caller passes none.
    pub timeout_ms: u32,
}

impl Default for FlashSettings {
    fn default() -> Self {
        Self {
            timeout_ms: FlashMessage::DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Loading indicator settings.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct SpinnerSettings {
    /// Class name of the indicator element.
    pub class: String,
}

impl Default for SpinnerSettings {
    fn default() -> Self {
        Self {
            class: "spinner".to_string(),
        }
    }
}

/// Form validation settings.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct FormSettings {
    /// Selector for fields that must be non-empty.
    pub required_selector: String,
    /// Class toggled on empty required fields.
    pub invalid_class: String,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            required_selector: "input[required], select[required], textarea[required]"
                .to_string(),
            invalid_class: "is-invalid".to_string(),
        }
    }
}

/// Password strength settings.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct PasswordSettings {
    /// Minimum length that earns the length point.
    pub min_length: usize,
}

impl Default for PasswordSettings {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

impl PasswordSettings {
    /// Scoring policy for these settings.
    #[must_use]
    pub const fn policy(&self) -> PasswordPolicy {
        PasswordPolicy {
            min_length: self.min_length,
        }
    }
}

/// Fetch wrapper settings.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiSettings {
    /// Headers sent with every request unless the caller overrides them.
    pub default_headers: Vec<(String, String)>,
    /// Abort requests that take longer than this many milliseconds.
    pub timeout_ms: Option<u32>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            default_headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("X-Requested-With".to_string(), "XMLHttpRequest".to_string()),
            ],
            timeout_ms: None,
        }
    }
}

/// Third-party widget trigger selectors.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetSettings {
    /// Elements that get a Bootstrap tooltip.
    pub tooltip_selector: String,
    /// Elements that get a Bootstrap popover.
    pub popover_selector: String,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            tooltip_selector: "[data-bs-toggle=\"tooltip\"]".to_string(),
            popover_selector: "[data-bs-toggle=\"popover\"]".to_string(),
        }
    }
}

impl UiConfig {
    /// Parse and validate a JSON configuration payload.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::InvalidField`] when a value fails validation.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that would make the DOM glue misbehave.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] for the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_empty = [
            ("theme", "storageKey", &self.theme.storage_key),
            ("theme", "linkId", &self.theme.link_id),
            ("spinner", "class", &self.spinner.class),
            ("forms", "requiredSelector", &self.forms.required_selector),
            ("forms", "invalidClass", &self.forms.invalid_class),
        ];
        for (section, field, value) in non_empty {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidField {
                    section,
                    field,
                    reason: "must not be empty",
                });
            }
        }
        let single_token = [
            ("spinner", "class", &self.spinner.class),
            ("forms", "invalidClass", &self.forms.invalid_class),
        ];
        for (section, field, value) in single_token {
            if value.contains(char::is_whitespace) {
                return Err(ConfigError::InvalidField {
                    section,
                    field,
                    reason: "class names must be a single token",
                });
            }
        }
        if self.api.timeout_ms == Some(0) {
            return Err(ConfigError::InvalidField {
                section: "api",
                field: "timeoutMs",
                reason: "must be greater than zero",
            });
        }
        if self.password.min_length == 0 {
            return Err(ConfigError::InvalidField {
                section: "password",
                field: "minLength",
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }
}

/// Page configuration that stays provisional while the document is still parsing.
///
/// An inline config block placed after the module script is not in the DOM
/// yet when the module starts, so reads before the document is parsed reload
/// the block every time and only the first read afterwards is cached.
#[derive(Debug, Default)]
pub struct ConfigCell {
    current: RefCell<Option<Rc<UiConfig>>>,
    settled: Cell<bool>,
}

impl ConfigCell {
    /// Current configuration, calling `load` unless a settled value is cached.
    #[must_use]
    pub fn get(&self, document_parsed: bool, load: impl FnOnce() -> UiConfig) -> Rc<UiConfig> {
        if self.settled.get()
            && let Some(config) = self.current.borrow().as_ref()
        {
            return Rc::clone(config);
        }
        let config = Rc::new(load());
        *self.current.borrow_mut() = Some(Rc::clone(&config));
        self.settled.set(document_parsed);
        config
    }
}
