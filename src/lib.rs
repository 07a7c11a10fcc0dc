//! # folio
//!
//! Page behavior for a static portfolio site, compiled to WebAssembly.
//!
//! The crate owns four small controllers: smooth-scroll navigation with
//! active-link highlighting, a persisted auto/light/dark theme toggle, a
//! guard that checks the CV file exists before following its link, and a
//! click-to-reveal video cover. Controllers talk to the page only through
//! the capability traits in [`dom`] and the [`events`] source, so the same
//! logic runs against web-sys in the browser and against in-memory fakes in
//! tests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Pure theme enumeration and navigation math |
//! | [`dom`] | Element-accessor and platform capability traits |
//! | [`events`] | Event-source abstraction with RAII subscriptions |
//! | [`controllers`] | Navigation, theme, CV guard, video cover |
//! | [`page`] | Mounts every controller and owns their subscriptions |
//! | [`config`] | Selectors, offsets, and delays |
//! | [`error`] | Crate error type |
//! | `browser` | web-sys bindings and the wasm entry point (`hydrate` only) |

pub mod config;
pub mod controllers;
pub mod dom;
pub mod error;
pub mod events;
pub mod page;
pub mod state;

#[cfg(feature = "hydrate")]
pub mod browser;

#[cfg(test)]
pub(crate) mod fakes;
