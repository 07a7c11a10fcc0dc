//! Capability traits the controllers use instead of touching the DOM.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each trait is one slice of the page surface: layout reads for the
//! navigation bar and sections, the theme attribute and glyph, the video
//! cover, the alert dialog, durable storage, the network probe, and the
//! timer/task queue. The `browser` module implements them over web-sys;
//! tests use the in-memory fakes.

use futures::future::LocalBoxFuture;

use crate::error::PageError;
use crate::state::nav::SectionBox;

/// Layout reads and scroll control for the navigation controller.
pub trait NavDom {
    /// Rendered height of the fixed navigation bar.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::MissingElement`] when the bar is not in the page.
    fn header_height(&self) -> Result<f64, PageError>;

    /// Every page section in document order.
    fn sections(&self) -> Vec<SectionBox>;

    /// Top offset of the element with `id`, if it exists.
    fn element_top(&self, id: &str) -> Option<f64>;

    /// Current vertical scroll offset of the viewport.
    fn scroll_offset(&self) -> f64;

    /// Start a smooth animated scroll to `top`.
    fn smooth_scroll_to(&self, top: f64);

    /// Walk the navigation links once, marking each link whose `href`
    /// satisfies `is_active` and clearing the rest. Returns how many were
    /// marked.
    fn mark_active_links(&self, is_active: &dyn Fn(&str) -> bool) -> usize;
}

/// Visual theme surface.
pub trait ThemeDom {
    /// Force dark mode (`true`) or return to the default palette.
    fn set_forced_dark(&self, dark: bool);

    /// Replace the theme indicator glyph.
    fn set_theme_glyph(&self, glyph: &str);

    /// Whether the operating system currently prefers a dark color scheme.
    fn system_prefers_dark(&self) -> bool;
}

/// The overlay covering the embedded video.
pub trait CoverDom {
    fn hide_cover(&self);
    fn cover_hidden(&self) -> bool;
}

/// Blocking user notice.
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// Durable client-side key/value storage.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`PageError::Storage`] when the write is rejected.
    fn store(&self, key: &str, value: &str) -> Result<(), PageError>;
}

/// Existence check for a resource; resolves to the HTTP status code.
pub trait Prober {
    fn probe(&self, path: &str) -> LocalBoxFuture<'static, Result<u16, PageError>>;
}

/// Deferred work on the page's event loop.
pub trait Scheduler {
    /// Run `task` once after `delay_ms`.
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>);

    /// Drive `task` to completion as an independent task.
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

/// Whether an HTTP status counts as success (2xx).
#[must_use]
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}
