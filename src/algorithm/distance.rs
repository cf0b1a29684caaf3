use std::fmt;

use crate::graph::Weight;

/// Tentative or final distance from an origin.
///
/// Every finite distance orders below `Unreachable`, so solvers compare
/// candidates directly without a "maximum value" sentinel that could overflow
/// when a weight is added to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance<W> {
    Finite(W),
    Unreachable,
}

impl<W> Distance<W>
where
    W: Weight,
{
    /// Distance of the origin to itself
    pub fn zero() -> Self {
        Distance::Finite(W::zero())
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns the finite value, if any
    pub fn finite(self) -> Option<W> {
        match self {
            Distance::Finite(value) => Some(value),
            Distance::Unreachable => None,
        }
    }

    /// Extends this distance by one arc. Unreachable stays unreachable, and a
    /// sum the weight type cannot represent is unreachable too.
    pub fn extend(self, weight: W) -> Self {
        match self {
            Distance::Finite(value) => value.checked_sum(weight).into(),
            Distance::Unreachable => Distance::Unreachable,
        }
    }
}

impl<W> From<Option<W>> for Distance<W> {
    fn from(value: Option<W>) -> Self {
        match value {
            Some(value) => Distance::Finite(value),
            None => Distance::Unreachable,
        }
    }
}

impl<W> fmt::Display for Distance<W>
where
    W: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(value) => write!(f, "{}", value),
            Distance::Unreachable => write!(f, "unreachable"),
        }
    }
}
