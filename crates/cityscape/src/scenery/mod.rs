//! Drawing routines for every scene element.
//!
//! Each routine is a pure function of the animation state and the canvas
//! viewport. Procedural placement uses seeded generators so the scene is
//! identical from frame to frame unless the state changes.

pub mod lamps;
pub mod night;
pub mod power;
pub mod rail;
pub mod sky;
pub mod skyline;
pub mod traffic;
pub mod waterfront;
