#![forbid(unsafe_code)]

//! Core primitives shared by the ZenTUI optimization crates: time sources
//! for scheduling and reference-equality handles for render-stable
//! properties.

pub mod clock;
pub mod shared;

pub use clock::{Clock, LabClock};
pub use shared::Shared;
