//! Click-to-reveal cover over the embedded video.
//!
//! Two paths hide the cover: a click on it, and a timer started when the
//! video frame reports loaded. Hiding is idempotent, so the order in which
//! they fire does not matter and the timer is never cancelled.

#[cfg(test)]
#[path = "video_cover_test.rs"]
mod video_cover_test;

use std::rc::Rc;

use crate::config::PageConfig;
use crate::dom::{CoverDom, Scheduler};
use crate::events::{EventSource, PageEvent, Subscription, Trigger};

pub struct VideoCover<D, T> {
    dom: Rc<D>,
    scheduler: Rc<T>,
    fallback_delay_ms: u32,
}

/// Hide the cover unless it is already hidden. Returns whether it changed.
fn hide_once(dom: &impl CoverDom) -> bool {
    if dom.cover_hidden() {
        return false;
    }
    dom.hide_cover();
    true
}

impl<D: CoverDom + 'static, T: Scheduler + 'static> VideoCover<D, T> {
    #[must_use]
    pub fn new(dom: Rc<D>, scheduler: Rc<T>, config: &PageConfig) -> Self {
        Self { dom, scheduler, fallback_delay_ms: config.cover_fallback_delay_ms }
    }

    pub fn on_click(&self) -> bool {
        hide_once(&*self.dom)
    }

    /// Schedule the backup hide after the frame has loaded.
    pub fn on_frame_loaded(&self) {
        let dom = Rc::clone(&self.dom);
        self.scheduler.after(
            self.fallback_delay_ms,
            Box::new(move || {
                if hide_once(&*dom) {
                    log::debug!("video cover: hidden after frame load");
                }
            }),
        );
    }

    pub fn mount(self: Rc<Self>, events: &impl EventSource) -> Vec<Subscription> {
        let on_click = Rc::clone(&self);
        let on_load = self;
        vec![
            events.subscribe(
                Trigger::CoverClick,
                Box::new(move |_: &PageEvent| {
                    on_click.on_click();
                }),
            ),
            events.subscribe(Trigger::VideoFrameLoad, Box::new(move |_: &PageEvent| on_load.on_frame_loaded())),
        ]
    }
}
