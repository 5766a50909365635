//! Small helpers shared across layers.

pub mod cookie;
pub mod html;
pub mod mask;
