//! Core logic: the profile registry, bounded polling, and the transition
//! spinner.

pub mod poll;
pub mod registry;
pub mod spinner;

pub use poll::{wait_until, PollPolicy};
pub use registry::Registry;
pub use spinner::Spinner;
