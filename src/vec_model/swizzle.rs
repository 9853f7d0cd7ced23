//! permuted axis accessors
//!
//! `xy`, `yx` ... read into a new vector, `set_xy`, `set_yx` ... copy the
//! named components of another vector into the receiver

use super::*;

impl Vector {
    pub fn xx(self) -> Vector {
        Vector::new(self.x, self.x)
    }

    pub fn xy(self) -> Vector {
        Vector::new(self.x, self.y)
    }

    pub fn yx(self) -> Vector {
        Vector::new(self.y, self.x)
    }

    pub fn yy(self) -> Vector {
        Vector::new(self.y, self.y)
    }

    /// x = other.x, y = other.x
    pub fn set_xx(&mut self, other: Vector) -> &mut Self {
        self.set(other.x, other.x)
    }

    /// x = other.x, y = other.y
    pub fn set_xy(&mut self, other: Vector) -> &mut Self {
        self.set(other.x, other.y)
    }

    /// x = other.y, y = other.x
    pub fn set_yx(&mut self, other: Vector) -> &mut Self {
        self.set(other.y, other.x)
    }

    /// x = other.y, y = other.y
    pub fn set_yy(&mut self, other: Vector) -> &mut Self {
        self.set(other.y, other.y)
    }
}

#[cfg(test)]
mod test_swizzle {
    use super::*;

    #[test]
    fn test_read() {
        let v = Vector::new(1.0, 2.0);
        assert_eq!(v.yx(), Vector::new(2.0, 1.0));
        assert_eq!(v, Vector::new(1.0, 2.0));
        assert_eq!(v.xx(), Vector::new(1.0, 1.0));
        assert_eq!(v.xy(), v);
        assert_eq!(v.yy(), Vector::new(2.0, 2.0));
    }

    #[test]
    fn test_write() {
        let other = Vector::new(3.0, 4.0);
        let mut v = Vector::default();

        v.set_xx(other);
        assert_eq!(v, Vector::new(3.0, 3.0));
        v.set_yy(other);
        assert_eq!(v, Vector::new(4.0, 4.0));
        v.set_xy(other);
        assert_eq!(v, Vector::new(3.0, 4.0));
        v.set_yx(other);
        assert_eq!(v, Vector::new(4.0, 3.0));
        assert_eq!(other, Vector::new(3.0, 4.0));
    }

    #[test]
    fn test_write_chained() {
        let mut v = Vector::new(1.0, 2.0);
        let swapped = v;
        v.set_yx(swapped).imul(2.0);
        assert_eq!(v, Vector::new(4.0, 2.0));
    }
}
