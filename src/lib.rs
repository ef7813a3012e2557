#![deny(unused_imports)]

pub mod math;
pub mod utils;

pub use math::Vector;
pub use math::Vector as Vec2;
