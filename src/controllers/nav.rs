//! Smooth-scroll navigation and active-link highlighting.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::rc::Rc;

use crate::config::PageConfig;
use crate::dom::NavDom;
use crate::events::{EventSource, PageEvent, Subscription, Trigger};
use crate::state::nav::{active_section, fragment_id, link_matches, scroll_target};

pub struct NavController<D> {
    dom: Rc<D>,
    scroll_gap: f64,
    lookahead: f64,
}

impl<D: NavDom + 'static> NavController<D> {
    #[must_use]
    pub fn new(dom: Rc<D>, config: &PageConfig) -> Self {
        Self { dom, scroll_gap: config.scroll_gap_px, lookahead: config.active_lookahead_px }
    }

    /// Handle a click on an in-page anchor.
    ///
    /// The browser's jump is always suppressed. When the fragment names an
    /// existing element, a smooth scroll to just below the header starts and
    /// its target offset is returned.
    pub fn on_anchor_click(&self, event: &PageEvent) -> Option<f64> {
        event.prevent_default();
        let id = event.href.as_deref().and_then(fragment_id)?;
        let Some(section_top) = self.dom.element_top(id) else {
            log::debug!("nav: no element for #{id}");
            return None;
        };
        let header_height = self.header_height()?;
        let target = scroll_target(section_top, header_height, self.scroll_gap);
        self.dom.smooth_scroll_to(target);
        Some(target)
    }

    /// Recompute which nav link is active for the current scroll offset.
    ///
    /// Returns the active section id. Every other link loses its marker.
    pub fn on_scroll(&self) -> Option<String> {
        let header_height = self.header_height()?;
        let sections = self.dom.sections();
        let current = active_section(&sections, self.dom.scroll_offset(), header_height, self.lookahead);
        self.dom.mark_active_links(&|href| current.is_some_and(|id| link_matches(href, id)));
        current.map(str::to_owned)
    }

    fn header_height(&self) -> Option<f64> {
        match self.dom.header_height() {
            Ok(height) => Some(height),
            Err(err) => {
                log::debug!("nav: {err}, skipping");
                None
            }
        }
    }

    /// Highlight the current link, then follow anchor clicks and scrolling.
    pub fn mount(self: Rc<Self>, events: &impl EventSource) -> Vec<Subscription> {
        self.on_scroll();

        let on_click = Rc::clone(&self);
        let on_scroll = self;
        vec![
            events.subscribe(
                Trigger::AnchorClick,
                Box::new(move |event: &PageEvent| {
                    on_click.on_anchor_click(event);
                }),
            ),
            events.subscribe(
                Trigger::Scroll,
                Box::new(move |_: &PageEvent| {
                    on_scroll.on_scroll();
                }),
            ),
        ]
    }
}
