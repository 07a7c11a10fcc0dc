//! Browser bindings and the wasm entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! `start` runs when the module is instantiated. It installs the console
//! logger and panic hook, then mounts the page as soon as the DOM is ready.
//! The mounted [`Page`] lives in a thread-local slot until `teardown`.

mod dom;
mod events;
mod probe;
mod scheduler;
mod storage;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;

pub use dom::BrowserDom;
pub use events::BrowserEvents;
pub use probe::HttpProber;
pub use scheduler::BrowserScheduler;
pub use storage::LocalStore;

use crate::config::{CONFIG_ATTRIBUTE, PageConfig};
use crate::page::{Page, PageEnv};

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        log::debug!("console logger already installed: {err}");
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() != "loading" {
        mount_page();
        return;
    }

    let on_ready = Closure::wrap(Box::new(mount_page) as Box<dyn FnMut()>);
    match document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref()) {
        Ok(()) => on_ready.forget(),
        Err(err) => {
            log::warn!("DOMContentLoaded listener failed: {err:?}");
            mount_page();
        }
    }
}

/// Mount (or re-mount) every page behavior.
#[wasm_bindgen]
pub fn mount_page() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let overrides = document.body().and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));
    let config = PageConfig::resolve(overrides.as_deref());

    let env = PageEnv {
        dom: Rc::new(BrowserDom::new(window.clone(), document.clone(), config.clone())),
        store: Rc::new(LocalStore::new(&window)),
        prober: Rc::new(HttpProber),
        scheduler: Rc::new(BrowserScheduler),
    };
    let events = BrowserEvents::new(window, document, config.clone());

    teardown();
    let page = Page::mount(&config, &env, &events);
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
}

/// Detach every page handler.
#[wasm_bindgen]
pub fn teardown() {
    PAGE.with(|slot| drop(slot.borrow_mut().take()));
}
