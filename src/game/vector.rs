use std::ops::{Add, Mul, Sub};

/// Plain 2D value used for grid coordinates and pixel geometry alike.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Copy> Vector2<T> {
    /// Applies `f` to each pair of components.
    pub fn dotwise<F>(f: F, a: Self, b: Self) -> Self
    where
        F: Fn(T, T) -> T,
    {
        Self::new(f(a.x, b.x), f(a.y, b.y))
    }

    pub fn hadamard(self, other: Self) -> Self
    where
        T: Mul<Output = T>,
    {
        Self::dotwise(|a, b| a * b, self, other)
    }
}

impl<T: Add<Output = T>> Add for Vector2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Sub<Output = T>> Sub for Vector2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}
