use serde::{Serialize, Deserialize};
use std::ops;
use std::cmp;


/// The value a leaf outputs:
/// a vote `±1`, half log-odds, or a least-squares fit.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[repr(transparent)]
pub(crate) struct Confidence<T>(pub(crate) T);


impl<T> From<T> for Confidence<T> {
    #[inline]
    fn from(confidence: T) -> Self {
        Self(confidence)
    }
}


/// Struct `Depth` defines the remaining depth of a tree.
/// This is just a wrapper for `usize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub(crate) struct Depth(usize);


impl From<usize> for Depth {
    fn from(depth: usize) -> Self {
        Self(depth)
    }
}


impl ops::Sub<usize> for Depth {
    type Output = Self;
    /// The subtraction saturates at `0`.
    #[inline]
    fn sub(self, other: usize) -> Self::Output {
        Self(self.0.saturating_sub(other))
    }
}


impl cmp::PartialEq<usize> for Depth {
    #[inline]
    fn eq(&self, rhs: &usize) -> bool {
        self.0.eq(rhs)
    }
}


impl cmp::PartialOrd<usize> for Depth {
    #[inline]
    fn partial_cmp(&self, other: &usize) -> Option<cmp::Ordering> {
        self.0.partial_cmp(other)
    }
}


impl std::fmt::Display for Depth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}


#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[repr(transparent)]
pub(crate) struct Threshold(pub(crate) f64);


impl From<f64> for Threshold {
    #[inline]
    fn from(threshold: f64) -> Self {
        Self(threshold)
    }
}


/// Score of a split, lower is better.
/// This is just a wrapper for `f64`.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub(crate) struct Score(pub(crate) f64);


impl From<f64> for Score {
    #[inline(always)]
    fn from(score: f64) -> Self {
        Self(score)
    }
}


impl ops::Add for Score {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self::Output {
        Self(self.0 + other.0)
    }
}
