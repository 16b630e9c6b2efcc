//! NOTAM pooling and display ordering.

pub mod pool;
pub mod render;

pub use pool::{aggregate, NotamSet};
pub use render::render;
