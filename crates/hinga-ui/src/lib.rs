#![forbid(unsafe_code)]

//! Presentational HTML components for Hinga.
//!
//! A `Component` renders itself into an HTML string buffer. Components here
//! are stateless: same component, same markup, every render.

use std::fmt::Write as _;

/// A `Component` is a renderable piece of markup.
pub trait Component {
    /// Render the component's HTML into `out`.
    fn render_html(&self, out: &mut String);

    /// Render into a fresh string. Convenience over [`Component::render_html`].
    fn to_html(&self) -> String {
        let mut out = String::new();
        self.render_html(&mut out);
        out
    }
}

fn html_escape(value: &str) -> String {
    v_htmlescape::escape(value).to_string()
}

/// The Hinga logo: a fixed 72x72 image with static alt text.
///
/// The asset is compiled in, so a missing or moved file is a build failure
/// rather than a broken image at runtime. Hosts serve the bytes from
/// [`Logo::asset`] at [`Logo::SRC`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Logo;

impl Logo {
    /// Route the embedded asset is served under.
    pub const SRC: &'static str = "/assets/logo.svg";

    /// Rendered dimensions, in CSS pixels.
    pub const SIZE: u32 = 72;

    const ALT: &'static str = "Hinga logo";

    /// The embedded SVG asset.
    #[must_use]
    pub const fn asset() -> &'static str {
        include_str!("../assets/logo.svg")
    }
}

impl Component for Logo {
    fn render_html(&self, out: &mut String) {
        let _ = write!(
            out,
            "<img src=\"{}\" width=\"{size}\" height=\"{size}\" alt=\"{}\">",
            html_escape(Self::SRC),
            html_escape(Self::ALT),
            size = Self::SIZE,
        );
    }
}
