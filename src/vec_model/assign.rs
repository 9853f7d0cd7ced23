use super::*;

impl Vector {
    /// Reset another vector with one's values, another is modified directly.
    pub fn reset(self, another: &mut Vector) -> &mut Vector {
        another.x = self.x;
        another.y = self.y;
        another
    }

    /// Reset vector to origin
    pub fn zero(&mut self) -> &mut Self {
        self.set(0.0, 0.0)
    }

    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Returns a new vector copied from vector
    pub fn copy(self) -> Vector {
        Vector::new(self.x, self.y)
    }
}
