#![forbid(unsafe_code)]

//! The closed set of locales Hinga serves.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A supported UI locale.
///
/// The set is closed by design: route matching, dictionary fallback, and
/// link generation all assume exactly these codes exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Kinyarwanda.
    Rw,
    /// French.
    Fr,
}

/// Error returned when a string is not one of the supported locale codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale code: {code}")]
pub struct LocaleParseError {
    pub code: String,
}

impl Locale {
    /// Every supported locale, in display order.
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Rw, Locale::Fr];

    /// The locale used when a request path carries no locale prefix.
    pub const DEFAULT: Locale = Locale::En;

    /// The lowercase route code for this locale.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Rw => "rw",
            Locale::Fr => "fr",
        }
    }

    /// Whether this is the default locale (which stays unprefixed in URLs).
    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Locale::En)
    }
}

impl FromStr for Locale {
    type Err = LocaleParseError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "en" => Ok(Locale::En),
            "rw" => Ok(Locale::Rw),
            "fr" => Ok(Locale::Fr),
            other => Err(LocaleParseError {
                code: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
