//! web-sys implementation of the page capability traits.
//!
//! Elements are looked up on every call, as the page may re-render parts of
//! itself; a missing element turns the call into a no-op.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config::PageConfig;
use crate::dom::{CoverDom, NavDom, Notifier, ThemeDom};
use crate::error::PageError;
use crate::state::nav::SectionBox;

const THEME_ATTRIBUTE: &str = "data-theme";
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

pub struct BrowserDom {
    window: Window,
    document: Document,
    config: PageConfig,
}

/// Log a failed DOM call and carry on.
fn warn_on_err(what: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::warn!("{what} failed: {err:?}");
    }
}

impl BrowserDom {
    #[must_use]
    pub fn new(window: Window, document: Document, config: PageConfig) -> Self {
        Self { window, document, config }
    }

    fn query(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                log::warn!("invalid selector {selector:?}: {err:?}");
                None
            }
        }
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                log::warn!("invalid selector {selector:?}: {err:?}");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_ref::<Element>().cloned())
            .collect()
    }

    fn query_html(&self, selector: &str) -> Option<HtmlElement> {
        self.query(selector).and_then(|el| el.dyn_ref::<HtmlElement>().cloned())
    }
}

fn offset_top(element: &Element) -> Option<f64> {
    element.dyn_ref::<HtmlElement>().map(|el| f64::from(el.offset_top()))
}

impl NavDom for BrowserDom {
    fn header_height(&self) -> Result<f64, PageError> {
        let selector = &self.config.nav_bar_selector;
        self.query_html(selector)
            .map(|nav| f64::from(nav.offset_height()))
            .ok_or_else(|| PageError::MissingElement(selector.clone()))
    }

    fn sections(&self) -> Vec<SectionBox> {
        self.query_all(&self.config.section_selector)
            .iter()
            .filter_map(|section| {
                let top = offset_top(section)?;
                let id = section.get_attribute("id");
                Some(SectionBox { id, top })
            })
            .collect()
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        self.document.get_element_by_id(id).as_ref().and_then(offset_top)
    }

    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or_default()
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn mark_active_links(&self, is_active: &dyn Fn(&str) -> bool) -> usize {
        let class = self.config.active_class.as_str();
        let mut marked = 0;
        for link in self.query_all(&self.config.nav_link_selector) {
            let classes = link.class_list();
            if is_active(&link.get_attribute("href").unwrap_or_default()) {
                warn_on_err("classList.add", classes.add_1(class));
                marked += 1;
            } else {
                warn_on_err("classList.remove", classes.remove_1(class));
            }
        }
        marked
    }
}

impl ThemeDom for BrowserDom {
    fn set_forced_dark(&self, dark: bool) {
        let Some(root) = self.document.document_element() else {
            return;
        };
        if dark {
            warn_on_err("set data-theme", root.set_attribute(THEME_ATTRIBUTE, "dark"));
        } else {
            warn_on_err("remove data-theme", root.remove_attribute(THEME_ATTRIBUTE));
        }
    }

    fn set_theme_glyph(&self, glyph: &str) {
        if let Some(icon) = self.query(&self.config.theme_icon_selector) {
            icon.set_text_content(Some(glyph));
        }
    }

    fn system_prefers_dark(&self) -> bool {
        match self.window.match_media(DARK_QUERY) {
            Ok(Some(query)) => query.matches(),
            _ => false,
        }
    }
}

impl CoverDom for BrowserDom {
    fn hide_cover(&self) {
        if let Some(cover) = self.query_html(&self.config.video_cover_selector) {
            warn_on_err("hide video cover", cover.style().set_property("display", "none"));
        }
    }

    fn cover_hidden(&self) -> bool {
        self.query_html(&self.config.video_cover_selector)
            .is_none_or(|cover| cover.style().get_property_value("display").is_ok_and(|display| display == "none"))
    }
}

impl Notifier for BrowserDom {
    fn alert(&self, message: &str) {
        warn_on_err("alert", self.window.alert_with_message(message));
    }
}

/// Media query tracking the system dark preference, if the browser has one.
pub(super) fn dark_scheme_query(window: &Window) -> Option<web_sys::MediaQueryList> {
    match window.match_media(DARK_QUERY) {
        Ok(query) => query,
        Err(err) => {
            log::debug!("matchMedia unavailable: {err:?}");
            None
        }
    }
}
