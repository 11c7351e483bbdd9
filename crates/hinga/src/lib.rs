#![forbid(unsafe_code)]

//! Hinga public facade crate.
//!
//! Provides the stable, ergonomic surface area for apps built on the Hinga
//! client toolkit. It re-exports common types from the internal crates and
//! offers a lightweight prelude for day-to-day usage.

// --- API re-exports --------------------------------------------------------

pub use hinga_api::{ApiClient, ApiError};

// --- Forms re-exports ------------------------------------------------------

pub use hinga_forms::{Field, FieldError, LoginMessages, LoginSchema, LoginValues, login_schema};

// --- i18n re-exports -------------------------------------------------------

pub use hinga_i18n::{
    Dictionary, Locale, LocaleParseError, href, localized_path, redirect_target, split_locale,
};

// --- UI re-exports ---------------------------------------------------------

pub use hinga_ui::{Component, Logo};

/// Common imports for Hinga apps.
pub mod prelude {
    pub use hinga_api::ApiClient;
    pub use hinga_forms::{LoginMessages, LoginValues, login_schema};
    pub use hinga_i18n::{Dictionary, Locale, href, split_locale};
    pub use hinga_ui::{Component, Logo};
}
