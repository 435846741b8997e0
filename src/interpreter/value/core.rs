use crate::util::num::i64_to_f64_lossy;

/// Represents the result of evaluating an expression.
///
/// Literals always start out as integers. A computation stays exact for as
/// long as it can and becomes a real once a division is performed or an
/// integer operation overflows `i64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl Value {
    /// Converts the value to an `f64`.
    ///
    /// Integers beyond `2^53` lose precision in the conversion.
    ///
    /// # Example
    /// ```
    /// use arithex::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real(), 10.0);
    /// assert_eq!(Value::Real(2.5).as_real(), 2.5);
    /// ```
    #[must_use]
    pub fn as_real(&self) -> f64 {
        match self {
            Self::Integer(n) => i64_to_f64_lossy(*n),
            Self::Real(r) => *r,
        }
    }

    /// Promotes both operands to reals if either of them already is one.
    ///
    /// Two integers are returned unchanged.
    #[must_use]
    pub fn promote_to_real(self, other: Self) -> (Self, Self) {
        match (self, other) {
            (Self::Integer(_), Self::Integer(_)) => (self, other),
            _ => (Self::Real(self.as_real()), Self::Real(other.as_real())),
        }
    }

    /// Returns `true` if the value compares equal to zero.
    ///
    /// Both `0.0` and `-0.0` count as zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(n) => *n == 0,
            Self::Real(r) => *r == 0.0,
        }
    }

    /// Returns `true` if the value is [`Real`](Value::Real).
    #[must_use]
    pub const fn is_real(&self) -> bool {
        matches!(self, Self::Real(..))
    }

    /// Returns `true` if the value is [`Integer`](Value::Integer).
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}
