pub mod animator;
pub mod easing;
pub mod surface;
