use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::*;

// pure forms, the ops traits below forward to them
#[allow(clippy::should_implement_trait)]
impl Vector {
    /// Adds another to one. Returns a new vector.
    pub fn add(self, another: Vector) -> Vector {
        Vector::new(self.x + another.x, self.y + another.y)
    }

    /// Adds another to one, result is written into another.
    pub fn iadd(self, another: &mut Vector) -> &mut Vector {
        another.x += self.x;
        another.y += self.y;
        another
    }

    /// Substracts another from one. Returns a new vector.
    pub fn sub(self, another: Vector) -> Vector {
        Vector::new(self.x - another.x, self.y - another.y)
    }

    /// Substracts another from one, result is written into another.
    pub fn isub(self, another: &mut Vector) -> &mut Vector {
        another.x = self.x - another.x;
        another.y = self.y - another.y;
        another
    }

    /// Multiplies vector by scalar. Returns a new vector.
    pub fn mul(self, scalar: f64) -> Vector {
        Vector::new(scalar * self.x, scalar * self.y)
    }

    pub fn imul(&mut self, scalar: f64) -> &mut Self {
        self.x *= scalar;
        self.y *= scalar;
        self
    }

    /// Divides vector by scalar. Returns a new vector.
    ///
    /// zero scalar gives infinite or NaN components
    pub fn div(self, scalar: f64) -> Vector {
        Vector::new(self.x / scalar, self.y / scalar)
    }

    pub fn idiv(&mut self, scalar: f64) -> &mut Self {
        self.x /= scalar;
        self.y /= scalar;
        self
    }

    /// Lineary interpolates from one to another by factor t, t in [0, 1]
    pub fn lerp(self, another: Vector, t: f64) -> Vector {
        Vector::new(
            self.x + (another.x - self.x) * t,
            self.y + (another.y - self.y) * t,
        )
    }

    /// Rotates by theta radians, counterclockwise. Returns a new vector.
    pub fn rotate(self, theta: f64) -> Vector {
        let (sin, cos) = theta.sin_cos();
        Vector::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    pub fn irotate(&mut self, theta: f64) -> &mut Self {
        *self = self.rotate(theta);
        self
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::add(self, rhs)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::sub(self, rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        Vector::mul(self, rhs)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        Vector::mul(rhs, self)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        Vector::div(self, rhs)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        rhs.iadd(self);
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        *self = Vector::sub(*self, rhs);
    }
}

impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, rhs: f64) {
        self.imul(rhs);
    }
}

impl DivAssign<f64> for Vector {
    fn div_assign(&mut self, rhs: f64) {
        self.idiv(rhs);
    }
}
