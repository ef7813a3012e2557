/// Default scalar of [`crate::math::Vector`]
pub type Float = f64;
