#![forbid(unsafe_code)]

//! ZenTUI public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users.
//!
//! ```
//! use zentui::prelude::*;
//!
//! let label = Memoized::new(component(|n: &u32| format!("count: {n}")));
//! assert_eq!(label.view(&1), "count: 1");
//! assert_eq!(label.view(&1), "count: 1");
//! assert_eq!(label.renders(), 1);
//! ```

pub mod prelude {
    pub use zentui_core as core;
    pub use zentui_reactive as reactive;

    pub use zentui_core::{Clock, LabClock, Shared};
    pub use zentui_reactive::{
        Component, DEBOUNCE_WINDOW, Debounced, Memoized, ViewFn, component,
    };
}
