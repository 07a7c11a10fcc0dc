//! Theme toggle: auto -> light -> dark, persisted across visits.
//!
//! The controller owns the current [`Theme`]; the page attribute and glyph
//! are always rewritten from it, so they cannot drift. While in `Auto`, a
//! system color-scheme change re-applies `Auto` so the page tracks the OS
//! live.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort. A rejected write is logged and the in-memory
//! theme still changes; the visitor just loses it on the next visit.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::config::PageConfig;
use crate::dom::{PreferenceStore, ThemeDom};
use crate::events::{EventSource, PageEvent, Subscription, Trigger};
use crate::state::theme::Theme;

pub struct ThemeController<D, S> {
    dom: Rc<D>,
    store: Rc<S>,
    storage_key: String,
    current: Cell<Theme>,
}

impl<D: ThemeDom + 'static, S: PreferenceStore + 'static> ThemeController<D, S> {
    #[must_use]
    pub fn new(dom: Rc<D>, store: Rc<S>, config: &PageConfig) -> Self {
        Self { dom, store, storage_key: config.theme_storage_key.clone(), current: Cell::new(Theme::Auto) }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current.get()
    }

    /// Resume the persisted theme (or `Auto`) and apply it.
    pub fn init(&self) -> Theme {
        let stored = self.store.load(&self.storage_key);
        let theme = Theme::from_stored(stored.as_deref());
        if let Some(raw) = stored.as_deref().filter(|raw| *raw != theme.as_str()) {
            log::debug!("theme: ignoring stored value {raw:?}");
        }
        self.apply(theme);
        theme
    }

    /// Make `theme` current, render it, and persist its name.
    pub fn apply(&self, theme: Theme) {
        self.current.set(theme);
        self.dom.set_forced_dark(theme.resolves_dark(self.dom.system_prefers_dark()));
        self.dom.set_theme_glyph(theme.glyph());
        if let Err(err) = self.store.store(&self.storage_key, theme.as_str()) {
            log::warn!("theme: could not persist {theme}: {err}");
        }
    }

    /// Advance to the next theme in the cycle.
    pub fn cycle(&self) -> Theme {
        let next = self.current().next();
        self.apply(next);
        next
    }

    /// React to a system color-scheme change.
    ///
    /// Only `Auto` follows the system; forced themes ignore it.
    pub fn on_system_change(&self) {
        if self.current() == Theme::Auto {
            self.apply(Theme::Auto);
        }
    }

    /// Apply the stored theme, then follow the toggle and system changes.
    pub fn mount(self: Rc<Self>, events: &impl EventSource) -> Vec<Subscription> {
        self.init();

        let on_toggle = Rc::clone(&self);
        let on_system = self;
        vec![
            events.subscribe(
                Trigger::ThemeToggle,
                Box::new(move |_: &PageEvent| {
                    on_toggle.cycle();
                }),
            ),
            events.subscribe(Trigger::ColorSchemeChange, Box::new(move |_: &PageEvent| on_system.on_system_change())),
        ]
    }
}
