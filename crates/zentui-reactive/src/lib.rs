#![forbid(unsafe_code)]

//! Render-skip and update-coalescing primitives for ZenTUI.
//!
//! This crate provides two independent optimization utilities for
//! single-threaded, cooperatively scheduled UIs:
//!
//! - [`Memoized`]: wraps any [`Component`] so its view function is only
//!   re-invoked when the input properties change under the fixed shallow
//!   equality policy (values by `==`, [`Shared`](zentui_core::Shared)
//!   handles by reference).
//! - [`Debounced`]: a `get`/`set` state cell whose writes commit only after
//!   a fixed trailing-edge debounce window, coalescing bursts down to the
//!   last write.
//!
//! # Architecture
//!
//! Both utilities are leaves: they share no runtime state with each other
//! and require nothing from the host beyond its ordinary loop. The host
//! calls [`Component::view`] once per frame it wants rendered and
//! [`Debounced::poll`] once per loop turn; everything else is synchronous
//! and total. Time comes from [`zentui_core::Clock`], so tests drive every
//! timing decision through a manually advanced
//! [`LabClock`](zentui_core::LabClock).
//!
//! # Invariants
//!
//! 1. A wrapped component produces exactly the views the unwrapped one
//!    would; only the number of inner invocations changes.
//! 2. A skipped render is only ever justified by properties equal to the
//!    previously rendered ones; ambiguity falls open toward re-rendering.
//! 3. A debounced cell commits at most one value per quiet period, always
//!    the temporally last write, always on a `poll` turn.
//! 4. Dropping a cell releases its pending update without committing it.

pub mod component;
pub mod debounce;
pub mod memo;

pub use component::{Component, ViewFn, component};
pub use debounce::{
    DEBOUNCE_WINDOW, Debounced, debounce_commits_total, debounce_discards_total,
};
pub use memo::Memoized;
