//! Pure page state: the theme enumeration and navigation geometry.
//!
//! DESIGN
//! ======
//! Nothing here touches the DOM. Controllers feed measured values in and
//! apply the results, which keeps every rule testable with plain numbers.

pub mod nav;
pub mod theme;
