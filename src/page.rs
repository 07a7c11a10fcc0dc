//! Page assembly: build every controller and keep its subscriptions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Called once the DOM is ready. The theme goes first so the stored theme
//! is applied before anything else runs. Dropping the [`Page`] detaches
//! every handler, which lets the page be torn down and mounted again.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::rc::Rc;

use crate::config::PageConfig;
use crate::controllers::cv_guard::CvGuard;
use crate::controllers::nav::NavController;
use crate::controllers::theme::ThemeController;
use crate::controllers::video_cover::VideoCover;
use crate::dom::{CoverDom, NavDom, Notifier, PreferenceStore, Prober, Scheduler, ThemeDom};
use crate::events::{EventSource, Subscription};
use crate::state::theme::Theme;

/// Capabilities the page needs from its host.
pub struct PageEnv<D, S, P, T> {
    pub dom: Rc<D>,
    pub store: Rc<S>,
    pub prober: Rc<P>,
    pub scheduler: Rc<T>,
}

/// A mounted page. Handlers stay attached for as long as this lives.
pub struct Page {
    theme: Box<dyn Fn() -> Theme>,
    subscriptions: Vec<Subscription>,
}

impl Page {
    pub fn mount<D, S, P, T>(config: &PageConfig, env: &PageEnv<D, S, P, T>, events: &impl EventSource) -> Self
    where
        D: NavDom + ThemeDom + CoverDom + Notifier + 'static,
        S: PreferenceStore + 'static,
        P: Prober + 'static,
        T: Scheduler + 'static,
    {
        let theme = Rc::new(ThemeController::new(Rc::clone(&env.dom), Rc::clone(&env.store), config));
        let nav = Rc::new(NavController::new(Rc::clone(&env.dom), config));
        let cv = Rc::new(CvGuard::new(Rc::clone(&env.prober), Rc::clone(&env.dom), config));
        let cover = Rc::new(VideoCover::new(Rc::clone(&env.dom), Rc::clone(&env.scheduler), config));

        let mut subscriptions = Rc::clone(&theme).mount(events);
        subscriptions.extend(nav.mount(events));
        subscriptions.extend(cv.mount(events, Rc::clone(&env.scheduler)));
        subscriptions.extend(cover.mount(events));

        let attached = subscriptions.iter().filter(|sub| sub.is_attached()).count();
        log::info!("page mounted: {attached}/{} listeners attached, theme {}", subscriptions.len(), theme.current());

        Self { theme: Box::new(move || theme.current()), subscriptions }
    }

    /// Theme currently in effect.
    #[must_use]
    pub fn theme(&self) -> Theme {
        (self.theme)()
    }

    /// Number of handlers with a live target.
    #[must_use]
    pub fn attached_listeners(&self) -> usize {
        self.subscriptions.iter().filter(|sub| sub.is_attached()).count()
    }
}
