mod random;
mod traits;
mod vector;

pub use traits::*;
pub use vector::*;
