//! Theme identifiers and stylesheet addressing.
//!
//! # Design
//! - Validate theme names before they are interpolated into a stylesheet URL.
//! - Keep the persisted value a raw string so page-load markup can read it directly.
//! - The incoming stylesheet is attached before the old ones go; old links are dropped only once it loads.

use crate::core::config::ThemeSettings;
use std::fmt;
use thiserror::Error;

/// Errors produced when selecting a theme.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// The theme name was empty after trimming.
    #[error("theme name is empty")]
    Empty,
    /// The theme name contained a character outside `[A-Za-z0-9_-]`.
    #[error("theme name `{name}` contains invalid characters")]
    InvalidCharacter {
        /// Name supplied by the caller.
        name: String,
    },
    /// The theme is not listed in the configured catalog.
    #[error("theme `{name}` is not available")]
    Unavailable {
        /// Name supplied by the caller.
        name: String,
    },
}

/// Validated theme identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ThemeName(String);

impl ThemeName {
    /// Parse a theme identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Empty`] for blank input and
    /// [`ThemeError::InvalidCharacter`] when the name could escape the theme
    /// directory or break the stylesheet URL.
    pub fn parse(raw: &str) -> Result<Self, ThemeError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(ThemeError::Empty);
        }
        if !name
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
        {
            return Err(ThemeError::InvalidCharacter {
                name: name.to_string(),
            });
        }
        Ok(Self(name.to_string()))
    }

    /// Borrow the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl ThemeSettings {
    /// Parse `raw` and check it against the available catalog.
    ///
    /// An empty catalog accepts every well-formed name.
    ///
    /// # Errors
    ///
    /// Propagates [`ThemeName::parse`] failures and returns
    /// [`ThemeError::Unavailable`] for names outside the catalog.
    pub fn select(&self, raw: &str) -> Result<ThemeName, ThemeError> {
        let name = ThemeName::parse(raw)?;
        if !self.available.is_empty() && !self.available.iter().any(|t| t == name.as_str()) {
            return Err(ThemeError::Unavailable {
                name: name.as_str().to_string(),
            });
        }
        Ok(name)
    }

    /// Stylesheet URL for a theme.
    #[must_use]
    pub fn stylesheet_href(&self, theme: &ThemeName) -> String {
        format!("{}{}{}", self.href_prefix, theme, self.href_suffix)
    }

    /// Resolve the theme to apply on page load from a stored preference.
    #[must_use]
    pub fn resolve_stored(&self, stored: Option<&str>) -> ThemeName {
        stored
            .and_then(|value| self.select(value).ok())
            .unwrap_or_else(|| self.fallback())
    }

    fn fallback(&self) -> ThemeName {
        ThemeName::parse(&self.default).unwrap_or_else(|_| ThemeName("light".to_string()))
    }
}

/// Persistent home of the theme preference.
pub trait ThemeStore {
    /// Stored preference under `key`, if any.
    fn load(&self, key: &str) -> Option<String>;
    /// Remember `theme` under `key`.
    fn save(&self, key: &str, theme: &ThemeName);
}

/// How an incoming stylesheet settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StylesheetOutcome {
    /// The stylesheet loaded.
    Loaded,
    /// The stylesheet failed to load.
    Failed,
}

/// Stylesheet replacement waiting for the incoming link to settle.
#[derive(Debug)]
pub struct StylesheetSwap<L> {
    previous: Vec<L>,
    incoming: L,
}

impl<L> StylesheetSwap<L> {
    /// Pair the links currently in place with the one replacing them.
    pub const fn new(previous: Vec<L>, incoming: L) -> Self {
        Self { previous, incoming }
    }

    /// Link being attached.
    #[must_use]
    pub const fn incoming(&self) -> &L {
        &self.incoming
    }

    /// Links to take out of the document once the incoming one settled.
    ///
    /// A loaded stylesheet replaces every previous link; a failed one is
    /// withdrawn and the previous links stay.
    #[must_use]
    pub fn settle(self, outcome: StylesheetOutcome) -> Vec<L> {
        match outcome {
            StylesheetOutcome::Loaded => self.previous,
            StylesheetOutcome::Failed => vec![self.incoming],
        }
    }
}

/// Document side of a theme switch.
pub trait StylesheetHost {
    /// Handle to a stylesheet link element.
    type Link;

    /// Theme links currently in the document.
    fn theme_links(&self, link_id: &str) -> Vec<Self::Link>;

    /// Build a detached stylesheet link; `None` when the document refused.
    fn create_link(&self, link_id: &str, href: &str) -> Option<Self::Link>;

    /// Attach the incoming link and settle `swap` when it loads or fails.
    fn attach(&self, swap: StylesheetSwap<Self::Link>);
}

/// Validate `raw`, start the stylesheet swap and persist the choice.
///
/// The preference is stored even when the document could not take the new link.
///
/// # Errors
///
/// Returns the [`ThemeError`] from [`ThemeSettings::select`]; nothing is
/// swapped or stored in that case.
pub fn switch_theme<H, S>(
    settings: &ThemeSettings,
    host: &H,
    store: &S,
    raw: &str,
) -> Result<ThemeName, ThemeError>
where
    H: StylesheetHost,
    S: ThemeStore,
{
    let theme = settings.select(raw)?;
    let previous = host.theme_links(&settings.link_id);
    if let Some(incoming) = host.create_link(&settings.link_id, &settings.stylesheet_href(&theme))
    {
        host.attach(StylesheetSwap::new(previous, incoming));
    }
    store.save(&settings.storage_key, &theme);
    Ok(theme)
}

/// Theme to apply on page load from whatever `store` holds.
#[must_use]
pub fn stored_theme<S: ThemeStore>(settings: &ThemeSettings, store: &S) -> ThemeName {
    settings.resolve_stored(store.load(&settings.storage_key).as_deref())
}
