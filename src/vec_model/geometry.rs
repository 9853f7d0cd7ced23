use super::*;

impl Vector {
    /// Distance between one and another vector
    pub fn distance(self, another: Vector) -> f64 {
        let dx = self.x - another.x;
        let dy = self.y - another.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Vector's magnitude (length)
    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Returns a new unit length vector with the same direction.
    ///
    /// zero vector gives NaN components
    pub fn normalized(self) -> Vector {
        self.div(self.magnitude())
    }

    /// Normalizes vector in place.
    pub fn normalize(&mut self) -> &mut Self {
        let magnitude = self.magnitude();
        self.idiv(magnitude)
    }

    /// Dot product between one and another
    pub fn dot(self, another: Vector) -> f64 {
        self.x * another.x + self.y * another.y
    }

    /// Angle (radians) of vector, measured from the x axis
    pub fn angle_of(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Angle (radians) of another relative to one
    pub fn angle_to(self, another: Vector) -> f64 {
        another.angle_of() - self.angle_of()
    }
}
