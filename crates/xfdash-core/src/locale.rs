//! Locale preference detection and localized key fallback.
//!
//! Detection reads the POSIX message-locale environment (`LC_ALL`, then
//! `LC_MESSAGES`, then `LANG`) once per scan pass and never fails: anything
//! unusable collapses to "no locale", which limits lookups to the plain
//! keys. The preference is an explicit value handed to the scanner rather
//! than process-global state.

use crate::desktop::Section;

/// Environment variables consulted for the message locale, in precedence
/// order.
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// A detected locale preference: the full region-qualified tag (`pt_BR`)
/// and the derived language code (`pt`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locale {
    full: Option<String>,
    language: Option<String>,
}

impl Locale {
    /// A preference with no localization available.
    pub fn none() -> Self {
        Self::default()
    }

    /// Build a preference from an explicit tag such as `pt_BR` or
    /// `en_US.UTF-8`.
    ///
    /// Encoding (`.UTF-8`) and modifier (`@euro`) suffixes are dropped;
    /// empty, `C`, and `POSIX` tags mean "no locale".
    pub fn from_tag(tag: &str) -> Self {
        let base = tag.split(['.', '@']).next().unwrap_or("").trim();

        if base.is_empty() || base == "C" || base == "POSIX" {
            return Self::none();
        }

        let language = base.split('_').next().unwrap_or(base).to_string();
        Self {
            full: Some(base.to_string()),
            language: Some(language),
        }
    }

    /// Detect the preference from the process environment.
    pub fn detect() -> Self {
        for var in LOCALE_ENV_VARS {
            if let Ok(value) = std::env::var(var) {
                if !value.is_empty() {
                    return Self::from_tag(&value);
                }
            }
        }
        Self::none()
    }

    /// The full locale tag, if one was detected.
    pub fn full(&self) -> Option<&str> {
        self.full.as_deref()
    }

    /// The leading language code, if one was derived.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Resolve a localized field from a descriptor section.
    ///
    /// Tries `key[full]`, then `key[language]`, then plain `key`; a field
    /// that is absent in every form resolves to the empty string.
    pub fn localized(&self, section: &Section, key: &str) -> String {
        if let Some(full) = &self.full {
            if let Some(value) = section.get(&format!("{key}[{full}]")) {
                return value.to_string();
            }
        }
        if let Some(language) = &self.language {
            if let Some(value) = section.get(&format!("{key}[{language}]")) {
                return value.to_string();
            }
        }
        section.get(key).unwrap_or_default().to_string()
    }
}
