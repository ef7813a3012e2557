pub trait One {
    fn one() -> Self;
}

impl One for f32 {
    fn one() -> Self {
        1.
    }
}

impl One for f64 {
    fn one() -> Self {
        1.
    }
}

/// Length of the hypotenuse without intermediate overflow or underflow
pub trait Hypot<Rhs = Self> {
    type Output;
    fn hypot(self, rhs: Rhs) -> Self::Output;
}

impl Hypot for f32 {
    type Output = f32;

    fn hypot(self, rhs: Self) -> Self::Output {
        f32::hypot(self, rhs)
    }
}

impl Hypot for f64 {
    type Output = f64;

    fn hypot(self, rhs: Self) -> Self::Output {
        f64::hypot(self, rhs)
    }
}

pub trait Atan2<Rhs = Self> {
    type Output;
    fn atan2(self, rhs: Rhs) -> Self::Output;
}

impl Atan2 for f32 {
    type Output = f32;

    fn atan2(self, rhs: Self) -> Self::Output {
        f32::atan2(self, rhs)
    }
}

impl Atan2 for f64 {
    type Output = f64;

    fn atan2(self, rhs: Self) -> Self::Output {
        f64::atan2(self, rhs)
    }
}

pub trait Cos {
    type Output;
    fn cos(self) -> Self::Output;
}

impl Cos for f32 {
    type Output = f32;

    fn cos(self) -> Self::Output {
        f32::cos(self)
    }
}

impl Cos for f64 {
    type Output = f64;

    fn cos(self) -> Self::Output {
        f64::cos(self)
    }
}

pub trait Sin {
    type Output;
    fn sin(self) -> Self::Output;
}

impl Sin for f32 {
    type Output = f32;

    fn sin(self) -> Self::Output {
        f32::sin(self)
    }
}

impl Sin for f64 {
    type Output = f64;

    fn sin(self) -> Self::Output {
        f64::sin(self)
    }
}
