#![forbid(unsafe_code)]

//! Locale-aware path helpers derived from the static locale set.
//!
//! URLs for non-default locales carry a `/<code>` prefix (`/rw/market`);
//! the default locale stays unprefixed (`/market`). Splitting is the exact
//! inverse: an unrecognized first segment means "default locale, path
//! untouched".

use std::str::FromStr;

use crate::locale::Locale;

/// Normalize a path to carry a single leading slash and no trailing
/// whitespace. The empty path becomes `/`.
fn normalize_path(path: &str) -> String {
    let trimmed = path.trim();
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Split a request path into its route locale and the remaining path.
///
/// A leading segment matching a supported locale code is stripped; anything
/// else (including unsupported codes such as `/de/...`) leaves the path
/// untouched and resolves to [`Locale::DEFAULT`].
#[must_use]
pub fn split_locale(path: &str) -> (Locale, String) {
    let normalized = normalize_path(path);
    let without_slash = &normalized[1..];
    let (first, rest) = match without_slash.split_once('/') {
        Some((first, rest)) => (first, rest),
        None => (without_slash, ""),
    };

    match Locale::from_str(first) {
        Ok(locale) => (locale, normalize_path(rest)),
        Err(_) => (Locale::DEFAULT, normalized),
    }
}

/// Build the locale-prefixed form of `path` for `locale`.
///
/// The default locale is never prefixed, so its paths round-trip unchanged
/// through [`split_locale`].
#[must_use]
pub fn localized_path(locale: Locale, path: &str) -> String {
    let normalized = normalize_path(path);
    if locale.is_default() {
        normalized
    } else if normalized == "/" {
        format!("/{}", locale.as_str())
    } else {
        format!("/{}{normalized}", locale.as_str())
    }
}

/// Href for an in-app link to `path` under `locale`.
#[must_use]
pub fn href(locale: Locale, path: &str) -> String {
    localized_path(locale, path)
}

/// Target location for a server-side redirect to `path` under `locale`.
#[must_use]
pub fn redirect_target(locale: Locale, path: &str) -> String {
    localized_path(locale, path)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{href, localized_path, redirect_target, split_locale};
    use crate::locale::Locale;

    #[test]
    fn split_strips_supported_locale_prefix() {
        assert_eq!(
            split_locale("/rw/market/crops"),
            (Locale::Rw, "/market/crops".to_string())
        );
        assert_eq!(split_locale("/fr"), (Locale::Fr, "/".to_string()));
    }

    #[test]
    fn split_falls_back_to_default_without_prefix() {
        assert_eq!(
            split_locale("/market/crops"),
            (Locale::En, "/market/crops".to_string())
        );
        assert_eq!(split_locale("/"), (Locale::En, "/".to_string()));
    }

    #[test]
    fn split_never_recognizes_unsupported_codes() {
        assert_eq!(
            split_locale("/de/market"),
            (Locale::En, "/de/market".to_string())
        );
        // Miscased codes are not route locales.
        assert_eq!(split_locale("/RW/market"), (Locale::En, "/RW/market".to_string()));
    }

    #[test]
    fn default_locale_paths_stay_unprefixed() {
        assert_eq!(localized_path(Locale::En, "/login"), "/login");
        assert_eq!(localized_path(Locale::En, "/"), "/");
    }

    #[test]
    fn non_default_locales_are_prefixed() {
        assert_eq!(localized_path(Locale::Rw, "/login"), "/rw/login");
        assert_eq!(localized_path(Locale::Fr, "/"), "/fr");
        assert_eq!(localized_path(Locale::Rw, "login"), "/rw/login");
    }

    #[test]
    fn href_and_redirect_agree_with_localized_path() {
        for locale in Locale::ALL {
            assert_eq!(href(locale, "/market"), localized_path(locale, "/market"));
            assert_eq!(
                redirect_target(locale, "/market"),
                localized_path(locale, "/market")
            );
        }
    }
}
