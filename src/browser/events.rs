//! DOM listeners behind the [`EventSource`] trait.
//!
//! Each subscription owns its `Closure`s. Dropping it removes the listeners
//! and frees the closures, so re-mounting never stacks handlers.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, Window};

use super::dom::dark_scheme_query;
use crate::config::PageConfig;
use crate::events::{DefaultAction, EventSource, Handler, PageEvent, Subscription, Trigger};

/// Cancels the wrapped DOM event.
struct DomDefault(Event);

impl DefaultAction for DomDefault {
    fn prevent(&self) {
        self.0.prevent_default();
    }
}

/// One attached DOM listener; removed on drop.
struct DomListener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Drop for DomListener {
    fn drop(&mut self) {
        if let Err(err) = self.target.remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref()) {
            log::warn!("removing {} listener failed: {err:?}", self.kind);
        }
    }
}

/// A listener target, plus the element whose `href` travels with clicks.
struct Target {
    target: EventTarget,
    kind: &'static str,
    link: Option<Element>,
}

pub struct BrowserEvents {
    window: Window,
    document: Document,
    config: PageConfig,
}

impl BrowserEvents {
    #[must_use]
    pub fn new(window: Window, document: Document, config: PageConfig) -> Self {
        Self { window, document, config }
    }

    fn elements(&self, selector: &str, all: bool) -> Vec<Element> {
        if !all {
            return match self.document.query_selector(selector) {
                Ok(found) => found.into_iter().collect(),
                Err(err) => {
                    log::warn!("invalid selector {selector:?}: {err:?}");
                    Vec::new()
                }
            };
        }
        match self.document.query_selector_all(selector) {
            Ok(list) => (0..list.length())
                .filter_map(|index| list.item(index))
                .filter_map(|node| node.dyn_ref::<Element>().cloned())
                .collect(),
            Err(err) => {
                log::warn!("invalid selector {selector:?}: {err:?}");
                Vec::new()
            }
        }
    }

    fn element_targets(&self, selector: &str, all: bool, kind: &'static str, with_href: bool) -> Vec<Target> {
        self.elements(selector, all)
            .into_iter()
            .map(|el| Target { target: el.clone().into(), kind, link: with_href.then_some(el) })
            .collect()
    }

    fn targets(&self, trigger: Trigger) -> Vec<Target> {
        let config = &self.config;
        match trigger {
            Trigger::AnchorClick => self.element_targets(&config.anchor_selector, true, "click", true),
            Trigger::Scroll => vec![Target { target: self.window.clone().into(), kind: "scroll", link: None }],
            Trigger::ColorSchemeChange => dark_scheme_query(&self.window)
                .into_iter()
                .map(|query| Target { target: query.into(), kind: "change", link: None })
                .collect(),
            Trigger::ThemeToggle => self.element_targets(&config.theme_toggle_selector, false, "click", false),
            Trigger::CvClick => self.element_targets(&config.cv_link_selector, false, "click", true),
            Trigger::CoverClick => self.element_targets(&config.video_cover_selector, false, "click", false),
            Trigger::VideoFrameLoad => self.element_targets(&config.video_frame_selector, false, "load", false),
        }
    }
}

impl EventSource for BrowserEvents {
    fn subscribe(&self, trigger: Trigger, handler: Handler) -> Subscription {
        let targets = self.targets(trigger);
        if targets.is_empty() {
            log::debug!("no target for {trigger:?}, skipping");
            return Subscription::empty();
        }

        let handler = Rc::new(RefCell::new(handler));
        let mut listeners = Vec::with_capacity(targets.len());
        for Target { target, kind, link } in targets {
            let handler = Rc::clone(&handler);
            let closure = Closure::wrap(Box::new(move |event: Event| {
                let href = link.as_ref().and_then(|el| el.get_attribute("href"));
                let page_event = PageEvent::with_default_action(trigger, href, Rc::new(DomDefault(event)));
                (&mut *handler.borrow_mut())(&page_event);
            }) as Box<dyn FnMut(Event)>);
            if let Err(err) = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref()) {
                log::warn!("adding {kind} listener for {trigger:?} failed: {err:?}");
                continue;
            }
            listeners.push(DomListener { target, kind, closure });
        }
        if listeners.is_empty() {
            return Subscription::empty();
        }
        Subscription::new(move || drop(listeners))
    }
}
