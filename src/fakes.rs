//! In-memory stand-ins for the page, used by controller tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::dom::{CoverDom, NavDom, Notifier, PreferenceStore, Prober, Scheduler, ThemeDom};
use crate::error::PageError;
use crate::events::{EventSource, Handler, PageEvent, Subscription, Trigger};
use crate::state::nav::SectionBox;

/// Fake document: layout, theme attribute, cover, and alerts.
#[derive(Default)]
pub struct FakePage {
    pub header_height: Option<f64>,
    pub sections: Vec<SectionBox>,
    pub extra_elements: HashMap<String, f64>,
    pub link_hrefs: Vec<String>,
    pub scroll_offset: Cell<f64>,
    pub scroll_calls: RefCell<Vec<f64>>,
    pub active_links: RefCell<Vec<bool>>,
    pub link_passes: Cell<u32>,
    pub forced_dark: Cell<bool>,
    pub glyph: RefCell<String>,
    pub system_dark: Cell<bool>,
    pub cover_hidden: Cell<bool>,
    pub cover_hide_calls: Cell<u32>,
    pub alerts: RefCell<Vec<String>>,
}

impl FakePage {
    /// Three-section portfolio with a 60px header.
    pub fn portfolio() -> Self {
        let sections = vec![SectionBox::new("home", 0.0), SectionBox::new("about", 800.0), SectionBox::new("contact", 1600.0)];
        let link_hrefs = vec!["#home".to_owned(), "#about".to_owned(), "#contact".to_owned()];
        Self {
            header_height: Some(60.0),
            active_links: RefCell::new(vec![false; link_hrefs.len()]),
            sections,
            link_hrefs,
            ..Self::default()
        }
    }

    pub fn active_hrefs(&self) -> Vec<String> {
        self.active_links
            .borrow()
            .iter()
            .zip(&self.link_hrefs)
            .filter(|(active, _)| **active)
            .map(|(_, href)| href.clone())
            .collect()
    }
}

impl NavDom for FakePage {
    fn header_height(&self) -> Result<f64, PageError> {
        self.header_height.ok_or_else(|| PageError::MissingElement(".navigation".into()))
    }

    fn sections(&self) -> Vec<SectionBox> {
        self.sections.clone()
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        self.sections
            .iter()
            .find(|section| section.id.as_deref() == Some(id))
            .map(|section| section.top)
            .or_else(|| self.extra_elements.get(id).copied())
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll_offset.get()
    }

    fn smooth_scroll_to(&self, top: f64) {
        self.scroll_calls.borrow_mut().push(top);
    }

    fn mark_active_links(&self, is_active: &dyn Fn(&str) -> bool) -> usize {
        self.link_passes.set(self.link_passes.get() + 1);
        let mut flags = self.active_links.borrow_mut();
        flags.clear();
        flags.extend(self.link_hrefs.iter().map(|href| is_active(href.as_str())));
        flags.iter().filter(|active| **active).count()
    }
}

impl ThemeDom for FakePage {
    fn set_forced_dark(&self, dark: bool) {
        self.forced_dark.set(dark);
    }

    fn set_theme_glyph(&self, glyph: &str) {
        glyph.clone_into(&mut self.glyph.borrow_mut());
    }

    fn system_prefers_dark(&self) -> bool {
        self.system_dark.get()
    }
}

impl CoverDom for FakePage {
    fn hide_cover(&self) {
        self.cover_hide_calls.set(self.cover_hide_calls.get() + 1);
        self.cover_hidden.set(true);
    }

    fn cover_hidden(&self) -> bool {
        self.cover_hidden.get()
    }
}

impl Notifier for FakePage {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_owned());
    }
}

/// Fake `localStorage`.
#[derive(Default)]
pub struct FakeStore {
    pub values: RefCell<HashMap<String, String>>,
    pub writes: Cell<u32>,
    pub read_only: bool,
}

impl FakeStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStore for FakeStore {
    fn load(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn store(&self, key: &str, value: &str) -> Result<(), PageError> {
        if self.read_only {
            return Err(PageError::Storage("quota exceeded".into()));
        }
        self.writes.set(self.writes.get() + 1);
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Probe answering with a fixed outcome.
pub struct FakeProber {
    pub outcome: Result<u16, String>,
    pub probed: Rc<RefCell<Vec<String>>>,
}

impl FakeProber {
    pub fn status(status: u16) -> Self {
        Self { outcome: Ok(status), probed: Rc::default() }
    }

    pub fn failing(reason: &str) -> Self {
        Self { outcome: Err(reason.to_owned()), probed: Rc::default() }
    }
}

impl Prober for FakeProber {
    fn probe(&self, path: &str) -> LocalBoxFuture<'static, Result<u16, PageError>> {
        self.probed.borrow_mut().push(path.to_owned());
        let outcome = self.outcome.clone().map_err(PageError::Probe);
        Box::pin(async move { outcome })
    }
}

/// Scheduler that queues work until the test runs it.
#[derive(Default)]
pub struct FakeScheduler {
    pub timers: RefCell<Vec<(u32, Box<dyn FnOnce()>)>>,
    pub tasks: RefCell<Vec<LocalBoxFuture<'static, ()>>>,
}

impl FakeScheduler {
    /// Fire every queued timer, returning their delays.
    pub fn fire_timers(&self) -> Vec<u32> {
        let timers: Vec<_> = self.timers.borrow_mut().drain(..).collect();
        timers
            .into_iter()
            .map(|(delay, task)| {
                task();
                delay
            })
            .collect()
    }

    /// Drive every spawned task to completion.
    pub fn run_tasks(&self) -> usize {
        let tasks: Vec<_> = self.tasks.borrow_mut().drain(..).collect();
        let count = tasks.len();
        for task in tasks {
            futures::executor::block_on(task);
        }
        count
    }
}

impl Scheduler for FakeScheduler {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        self.timers.borrow_mut().push((delay_ms, task));
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.tasks.borrow_mut().push(task);
    }
}

type Slot = (u64, Trigger, Rc<RefCell<Handler>>);

/// Event source whose events are emitted by the test.
#[derive(Default)]
pub struct FakeEvents {
    slots: Rc<RefCell<Vec<Slot>>>,
    next_id: Cell<u64>,
    /// Triggers with no target in the fake document.
    pub absent: Vec<Trigger>,
}

impl FakeEvents {
    /// Source whose document lacks targets for `absent`.
    pub fn without(absent: &[Trigger]) -> Self {
        Self { absent: absent.to_vec(), ..Self::default() }
    }

    /// Dispatch `event` to every handler subscribed to its trigger.
    pub fn emit(&self, event: &PageEvent) {
        let handlers: Vec<_> = self
            .slots
            .borrow()
            .iter()
            .filter(|(_, trigger, _)| *trigger == event.trigger)
            .map(|(_, _, handler)| Rc::clone(handler))
            .collect();
        for handler in handlers {
            (&mut *handler.borrow_mut())(event);
        }
    }

    pub fn emit_trigger(&self, trigger: Trigger) -> PageEvent {
        let event = PageEvent::new(trigger);
        self.emit(&event);
        event
    }

    pub fn click(&self, trigger: Trigger, href: Option<&str>) -> PageEvent {
        let event = match href {
            Some(href) => PageEvent::new(trigger).with_href(href),
            None => PageEvent::new(trigger),
        };
        self.emit(&event);
        event
    }

    pub fn listener_count(&self, trigger: Trigger) -> usize {
        self.slots.borrow().iter().filter(|(_, t, _)| *t == trigger).count()
    }

    pub fn total_listeners(&self) -> usize {
        self.slots.borrow().len()
    }
}

impl EventSource for FakeEvents {
    fn subscribe(&self, trigger: Trigger, handler: Handler) -> Subscription {
        if self.absent.contains(&trigger) {
            return Subscription::empty();
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.slots.borrow_mut().push((id, trigger, Rc::new(RefCell::new(handler))));
        let slots = Rc::clone(&self.slots);
        Subscription::new(move || slots.borrow_mut().retain(|(slot_id, _, _)| *slot_id != id))
    }
}
