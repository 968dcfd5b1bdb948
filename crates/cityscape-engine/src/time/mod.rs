//! Time subsystem.
//!
//! `TickScheduler` produces the fixed-interval update ticks polled by the
//! runtime.

mod tick_scheduler;

pub use tick_scheduler::TickScheduler;
