//! vector error type

use std::error::Error;
use std::fmt::{Display, Formatter};

/// What went wrong while building a Vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorErrorKind {
    /// input sequence too short to hold x and y
    InvalidArgument,
    /// text not in `"x, y"` form
    ParseError,
}

#[derive(Debug)]
pub struct VectorError {
    kind: VectorErrorKind,
    err: String,
}

impl VectorError {
    pub fn new(kind: VectorErrorKind, err: &str) -> VectorError {
        VectorError {
            kind,
            err: err.to_string(),
        }
    }

    pub fn kind(&self) -> VectorErrorKind {
        self.kind
    }
}

impl Display for VectorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[VectorError]({:?}): {}", self.kind, self.err)
    }
}

impl Error for VectorError {}

#[macro_export]
macro_rules! vec_err {
    ( $kind:ident, $x:expr ) => {{
        $crate::vec_error::VectorError::new(
            $crate::vec_error::VectorErrorKind::$kind,
            format!("{}:{} : {}", file!(), line!(), $x).as_str(),
        )
    }};
}

#[cfg(test)]
mod test_vec_error {
    use super::*;

    #[test]
    fn test_error_kind_and_message() {
        let err = vec_err!(ParseError, "bad input");
        assert_eq!(err.kind(), VectorErrorKind::ParseError);
        let msg = err.to_string();
        assert!(msg.starts_with("[VectorError](ParseError): "));
        assert!(msg.ends_with("bad input"));
        assert!(msg.contains("vec_error.rs"));
    }
}
