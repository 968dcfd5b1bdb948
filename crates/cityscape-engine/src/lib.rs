//! Cityscape engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the scene crate.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
