//! Event-source abstraction.
//!
//! Controllers subscribe to a [`Trigger`] and get back a [`Subscription`];
//! dropping the subscription detaches the handler. The browser source wires
//! triggers to DOM listeners, and tests drive the same handlers directly.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Page events the controllers react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Click on any in-page anchor (`href` starting with `#`).
    AnchorClick,
    /// Window scroll.
    Scroll,
    /// The system color-scheme preference changed.
    ColorSchemeChange,
    /// Click on the theme toggle control.
    ThemeToggle,
    /// Click on the CV download link.
    CvClick,
    /// Click on the video cover overlay.
    CoverClick,
    /// The embedded video frame finished loading.
    VideoFrameLoad,
}

/// Cancels the platform's default action for an event.
pub trait DefaultAction {
    fn prevent(&self);
}

/// No-op default action for events that have nothing to cancel.
struct Uncancelable;

impl DefaultAction for Uncancelable {
    fn prevent(&self) {}
}

/// One dispatched event.
///
/// Cheap to clone, so async handlers can keep it past the dispatch.
#[derive(Clone)]
pub struct PageEvent {
    pub trigger: Trigger,
    /// `href` of the clicked link, for click triggers on anchors.
    pub href: Option<String>,
    default_action: Rc<dyn DefaultAction>,
    prevented: Rc<Cell<bool>>,
}

impl PageEvent {
    /// Event with nothing to cancel (scroll, media change, load).
    #[must_use]
    pub fn new(trigger: Trigger) -> Self {
        Self::with_default_action(trigger, None, Rc::new(Uncancelable))
    }

    #[must_use]
    pub fn with_default_action(trigger: Trigger, href: Option<String>, default_action: Rc<dyn DefaultAction>) -> Self {
        Self { trigger, href, default_action, prevented: Rc::new(Cell::new(false)) }
    }

    /// Attach the clicked link's `href`.
    #[must_use]
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Suppress the platform default (navigation for link clicks).
    pub fn prevent_default(&self) {
        self.prevented.set(true);
        self.default_action.prevent();
    }

    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.prevented.get()
    }
}

impl fmt::Debug for PageEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageEvent")
            .field("trigger", &self.trigger)
            .field("href", &self.href)
            .field("prevented", &self.prevented.get())
            .finish_non_exhaustive()
    }
}

/// Boxed event handler.
pub type Handler = Box<dyn FnMut(&PageEvent)>;

/// Anything controllers can subscribe to.
pub trait EventSource {
    /// Attach `handler` to every target of `trigger`.
    ///
    /// If no target exists the subscription is empty and the handler never
    /// runs.
    fn subscribe(&self, trigger: Trigger, handler: Handler) -> Subscription;
}

/// Live registration; detaches its handler on drop.
#[must_use = "dropping a subscription detaches its handler"]
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self { detach: Some(Box::new(detach)) }
    }

    /// Subscription with nothing attached.
    pub fn empty() -> Self {
        Self { detach: None }
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.detach.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("attached", &self.is_attached()).finish()
    }
}
