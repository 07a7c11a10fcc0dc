//! Timers and tasks on the browser event loop.

use futures::future::LocalBoxFuture;
use gloo_timers::callback::Timeout;

use crate::dom::Scheduler;

pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        // Never cancelled; the task must be safe to run late.
        Timeout::new(delay_ms, task).forget();
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
