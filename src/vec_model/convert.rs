use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::iter::FusedIterator;
use std::str::FromStr;

use float_cmp::{ApproxEq, F64Margin};

use super::*;
use crate::vec_error::VectorError;

impl Vector {
    /// Create a new vector from an array of numbers
    ///
    /// only first two numbers are used, less than two is an error
    pub fn from_slice(data: &[f64]) -> Result<Vector, VectorError> {
        if data.len() < 2 {
            return Err(vec_err!(
                InvalidArgument,
                format!(
                    "Can't create Vector for data length less than 2: {:?}",
                    data
                )
            ));
        }
        Ok(Vector::new(data[0], data[1]))
    }

    /// Create a new vector from a string, x and y separated by a comma
    ///
    /// `Vector::parse("2, 3.14")` gives `Vector::new(2.0, 3.14)`
    pub fn parse(text: &str) -> Result<Vector, VectorError> {
        let (x, y) = match text.split_once(',') {
            Some(v) => v,
            None => {
                return Err(vec_err!(
                    ParseError,
                    format!("not valid vector string, no comma found: {:?}", text)
                ))
            }
        };
        Ok(Vector::new(
            parse_component(x, text)?,
            parse_component(y, text)?,
        ))
    }

    /// Component wise equality within [`EPSILON`]
    pub fn equals(self, another: Vector) -> bool {
        (self.x - another.x).abs() < EPSILON && (self.y - another.y).abs() < EPSILON
    }

    /// Compare by magnitude only
    ///
    /// NaN magnitudes are neither greater nor less, so they compare `Equal`
    pub fn compare(self, another: Vector) -> Ordering {
        self.magnitude()
            .partial_cmp(&another.magnitude())
            .unwrap_or(Ordering::Equal)
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// JSON representation, the `[x, y]` array
    pub fn to_json(self) -> [f64; 2] {
        self.to_array()
    }

    /// Iterate over x then y
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            vector: self,
            idx: 0,
        }
    }
}

fn parse_component(part: &str, text: &str) -> Result<f64, VectorError> {
    let part = part.trim();
    part.parse::<f64>().map_err(|err| {
        vec_err!(
            ParseError,
            format!("not valid number {:?} in vector string {:?}: {}", part, text, err)
        )
    })
}

impl FromStr for Vector {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Vector::parse(s)
    }
}

/// `x, y`, parsable by [`Vector::parse`]
impl Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

impl ApproxEq for Vector {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin = margin.into();
        self.x.approx_eq(other.x, margin) && self.y.approx_eq(other.y, margin)
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = VectorError;

    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        Vector::from_slice(value)
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = VectorError;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        Vector::from_slice(&value)
    }
}

impl From<[f64; 2]> for Vector {
    fn from(value: [f64; 2]) -> Self {
        Vector::new(value[0], value[1])
    }
}

impl From<(f64, f64)> for Vector {
    fn from(value: (f64, f64)) -> Self {
        Vector::new(value.0, value.1)
    }
}

impl From<Vector> for [f64; 2] {
    fn from(value: Vector) -> Self {
        value.to_array()
    }
}

impl From<Vector> for (f64, f64) {
    fn from(value: Vector) -> Self {
        (value.x, value.y)
    }
}

/// Iterator over a vector's components, x first
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    vector: &'a Vector,
    idx: usize,
}

impl Iterator for Iter<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let value = match self.idx {
            0 => self.vector.x,
            1 => self.vector.y,
            _ => return None,
        };
        self.idx += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = 2 - self.idx.min(2);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Vector {
    type Item = f64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl IntoIterator for Vector {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 2>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_array().into_iter()
    }
}


#[cfg(all(test, feature = "serde"))]
mod test_serde {
    use super::*;

    #[test]
    fn test_json_array_form() {
        let v = Vector::new(1.5, -2.0);
        assert_eq!(serde_json::to_string(&v).unwrap(), "[1.5,-2.0]");
        let back: Vector = serde_json::from_str("[1.5, -2.0]").unwrap();
        assert_eq!(back, v);
        assert!(serde_json::from_str::<Vector>("[1.5]").is_err());
    }
}
