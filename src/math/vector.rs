use std::{
    fmt::Display,
    ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign},
};

use crate::utils::Float;

use super::{Atan2, Cos, Hypot, One, Sin};

/// Two dimensional vector.
///
/// Length and angle are never stored, they are computed from `x` and `y` on every call.
/// Every in-place mutator returns `&mut Self` so calls can be chained:
///
/// ```
/// use vector2::Vector;
///
/// let length: f64 = Vector::new(1., 0.).scale(2.).normalize().length();
/// assert!((length - 1.).abs() < 1e-9);
/// ```
///
/// Degenerate input is not validated. Normalizing the zero vector divides by zero and
/// leaves NaN in both components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector<T = Float> {
    x: T,
    y: T,
}

impl<T> From<(T, T)> for Vector<T> {
    fn from(value: (T, T)) -> Self {
        Self {
            x: value.0,
            y: value.1,
        }
    }
}

impl<T> From<[T; 2]> for Vector<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T> From<Vector<T>> for (T, T) {
    fn from(value: Vector<T>) -> Self {
        (value.x, value.y)
    }
}

impl<T> From<Vector<T>> for [T; 2] {
    fn from(value: Vector<T>) -> Self {
        [value.x, value.y]
    }
}

impl<T> Vector<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn set_x(&mut self, x: T) -> &mut Self {
        self.x = x;
        self
    }

    pub fn set_y(&mut self, y: T) -> &mut Self {
        self.y = y;
        self
    }

    /// Replaces both components in one call
    pub fn set(&mut self, x: T, y: T) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }
}

impl<T> Vector<T>
where
    T: Copy,
{
    pub fn x(&self) -> T {
        self.x
    }

    pub fn y(&self) -> T {
        self.y
    }

    /// Snapshot of the components, not a view into the vector
    pub fn to_array(&self) -> [T; 2] {
        [self.x, self.y]
    }
}

impl<T> Vector<T>
where
    T: Copy + Mul<Output = T>,
{
    pub fn scale(&mut self, s: T) -> &mut Self {
        self.x = self.x * s;
        self.y = self.y * s;
        self
    }
}

impl<T> Vector<T>
where
    T: Copy + Hypot<Output = T>,
{
    pub fn length(&self) -> T {
        self.x.hypot(self.y)
    }
}

impl<T> Vector<T>
where
    T: Copy + Hypot<Output = T> + Mul<Output = T> + Div<Output = T>,
{
    /// Rescales the vector keeping its direction.
    /// Zero vector produces NaN components.
    pub fn set_length(&mut self, length: T) -> &mut Self {
        let factor = length / self.length();
        self.scale(factor)
    }

    pub fn normalize(&mut self) -> &mut Self
    where
        T: One,
    {
        self.set_length(T::one())
    }
}

impl<T> Vector<T>
where
    T: Copy + Atan2<Output = T>,
{
    /// Signed angle to the positive x axis in range -PI..=PI
    pub fn angle(&self) -> T {
        self.y.atan2(self.x)
    }
}

impl<T> Vector<T>
where
    T: Copy + Hypot<Output = T> + Cos<Output = T> + Sin<Output = T> + Mul<Output = T>,
{
    /// Rotates the vector to `angle` (radians) keeping its length
    pub fn set_angle(&mut self, angle: T) -> &mut Self {
        let length = self.length();
        self.set(angle.cos() * length, angle.sin() * length)
    }
}

impl<T> Vector<T>
where
    T: Copy + Cos<Output = T> + Sin<Output = T> + Mul<Output = T>,
{
    pub fn from_polar(length: T, angle: T) -> Self {
        Self {
            x: angle.cos() * length,
            y: angle.sin() * length,
        }
    }
}

impl<T> Vector<T>
where
    T: Copy + Add<Output = T> + Mul<Output = T>,
{
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }
}

impl<T> Vector<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
{
    /// Linear interpolation. `amt` outside of 0..=1 extrapolates.
    pub fn interpolate(from: Self, to: Self, amt: T) -> Self {
        Self {
            x: from.x + (to.x - from.x) * amt,
            y: from.y + (to.y - from.y) * amt,
        }
    }
}

impl<T> Display for Vector<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T> Add for Vector<T>
where
    T: Add<Output = T>,
{
    type Output = Vector<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Self::Output {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T> Add for &Vector<T>
where
    T: Copy + Add<Output = T>,
{
    type Output = Vector<T>;

    fn add(self, rhs: Self) -> Self::Output {
        *self + *rhs
    }
}

impl<T> Sub for Vector<T>
where
    T: Sub<Output = T>,
{
    type Output = Vector<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::Output {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T> Sub for &Vector<T>
where
    T: Copy + Sub<Output = T>,
{
    type Output = Vector<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        *self - *rhs
    }
}

impl<T> Neg for Vector<T>
where
    T: Neg<Output = T>,
{
    type Output = Vector<T>;

    fn neg(self) -> Self::Output {
        Self::Output {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T> Mul<T> for Vector<T>
where
    T: Copy + Mul<Output = T>,
{
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Self::Output {
        Self::Output {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl<T> Div<T> for Vector<T>
where
    T: Copy + Div<Output = T>,
{
    type Output = Vector<T>;

    fn div(self, rhs: T) -> Self::Output {
        Self::Output {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

impl<T> AddAssign for Vector<T>
where
    T: AddAssign,
{
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<T> SubAssign for Vector<T>
where
    T: SubAssign,
{
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl<T> MulAssign<T> for Vector<T>
where
    T: Copy + MulAssign,
{
    fn mul_assign(&mut self, rhs: T) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

#[cfg(test)]
impl<T> approx::AbsDiffEq for Vector<T>
where
    T: approx::AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}
