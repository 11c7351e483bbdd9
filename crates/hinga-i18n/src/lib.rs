#![forbid(unsafe_code)]

//! Localization foundation for Hinga.
//!
//! Owns the supported locale set, the locale-aware path helpers derived from
//! it, and the message dictionary that screens pull their strings from.
//!
//! # Role in Hinga
//! `hinga-i18n` isolates locale concerns so forms, views, and the API layer
//! stay locale-agnostic. The locale set is a closed enum: adding a locale is
//! a code change and a redeploy, never runtime state.
//!
//! # How it fits in the system
//! Routing helpers (`routing`) prefix and strip locale segments on URL paths.
//! The dictionary (`dictionary`) resolves message keys to localized text with
//! a fallback chain ending at the default locale. Neither depends on
//! rendering or HTTP, keeping this layer reusable and testable.

pub mod dictionary;
pub mod locale;
pub mod routing;

pub use dictionary::Dictionary;
pub use locale::{Locale, LocaleParseError};
pub use routing::{href, localized_path, redirect_target, split_locale};
