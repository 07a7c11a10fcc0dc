//! Page controllers.
//!
//! Each controller owns the state for one behavior, reads and writes the
//! page only through the [`crate::dom`] traits, and exposes `mount` to
//! attach its handlers to an [`crate::events::EventSource`]. The returned
//! subscriptions keep the handlers alive.

pub mod cv_guard;
pub mod nav;
pub mod theme;
pub mod video_cover;
