//! Shape payloads and their `DrawList` push helpers.

pub mod ellipse;
pub mod glow;
pub mod line;
pub mod points;
pub mod polygon;
pub mod rect;
