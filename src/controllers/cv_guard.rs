//! CV link guard: probe for the CV file when its link is clicked.
//!
//! The probe runs as its own task. Navigation is only suppressed once the
//! probe has failed, so on success the browser's normal navigation proceeds
//! untouched.

#[cfg(test)]
#[path = "cv_guard_test.rs"]
mod cv_guard_test;

use std::rc::Rc;

use crate::config::PageConfig;
use crate::dom::{Notifier, Prober, Scheduler, is_success};
use crate::events::{EventSource, PageEvent, Subscription, Trigger};

/// Outcome of one existence probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CvVerdict {
    Available,
    Unavailable,
}

pub struct CvGuard<P, N> {
    prober: Rc<P>,
    notifier: Rc<N>,
    path: String,
    missing_message: String,
}

impl<P: Prober + 'static, N: Notifier + 'static> CvGuard<P, N> {
    #[must_use]
    pub fn new(prober: Rc<P>, notifier: Rc<N>, config: &PageConfig) -> Self {
        Self {
            prober,
            notifier,
            path: config.cv_path.clone(),
            missing_message: config.cv_missing_message.clone(),
        }
    }

    /// Probe the CV and, if it is unavailable, cancel `event` and alert.
    pub async fn check(&self, event: &PageEvent) -> CvVerdict {
        let verdict = match self.prober.probe(&self.path).await {
            Ok(status) if is_success(status) => CvVerdict::Available,
            Ok(status) => {
                log::debug!("cv: {} answered {status}", self.path);
                CvVerdict::Unavailable
            }
            Err(err) => {
                log::debug!("cv: {err}");
                CvVerdict::Unavailable
            }
        };
        if verdict == CvVerdict::Unavailable {
            event.prevent_default();
            self.notifier.alert(&self.missing_message);
        }
        verdict
    }

    /// Probe on every CV link click.
    pub fn mount<T: Scheduler + 'static>(self: Rc<Self>, events: &impl EventSource, scheduler: Rc<T>) -> Vec<Subscription> {
        vec![events.subscribe(
            Trigger::CvClick,
            Box::new(move |event: &PageEvent| {
                let guard = Rc::clone(&self);
                let event = event.clone();
                scheduler.spawn(Box::pin(async move {
                    guard.check(&event).await;
                }));
            }),
        )]
    }
}
