//! Datasets
//!
//! This module implements the dataset struct and the numeric and label bounds used by the
//! target-based encoders.
use ndarray::{Array1, ArrayBase, Data, Ix1, ScalarOperand};

use num_traits::{FromPrimitive, NumAssignOps, NumCast};

use std::fmt;
use std::hash::Hash;
use std::iter::Sum;

use crate::error::{Error, Result};

/// Floating point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point number and
/// implement them for 32bit and 64bit floating points. They are used as regression targets and
/// as the element type of target-based codes.
pub trait Float:
    FromPrimitive
    + num_traits::Float
    + PartialOrd
    + Sync
    + Send
    + Default
    + fmt::Display
    + fmt::Debug
    + Sum
    + NumAssignOps
    + ScalarOperand
    + approx::AbsDiffEq
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}

impl Float for f64 {}

/// Discrete labels
///
/// Labels are countable, comparable and hashable. They are used as class targets of the
/// classification encoders. Strings, booleans and integer class indices are supported.
pub trait Label: PartialEq + Eq + Hash + Clone + fmt::Debug {}

impl Label for bool {}
impl Label for usize {}
impl Label for String {}
impl Label for &str {}

/// DatasetBase
///
/// A column of observed categories together with optional, aligned targets.
///
/// # Fields
///
/// * `records`: one-dimensional sequence of categories with dimensionality (nsamples)
/// * `targets`: aligned target values with dimensionality (nsamples), or `()` for encoders
/// which are fitted without targets
pub struct DatasetBase<R, T>
where
    R: Records,
{
    pub records: R,
    pub targets: T,
}

/// Dataset
///
/// Owned categories with owned targets.
pub type Dataset<C, T> = DatasetBase<Array1<C>, Array1<T>>;

/// Record trait
pub trait Records: Sized {
    type Elem;

    fn nsamples(&self) -> usize;
}

impl<S: Data> Records for ArrayBase<S, Ix1> {
    type Elem = S::Elem;

    fn nsamples(&self) -> usize {
        self.len()
    }
}

impl<R: Records, T> DatasetBase<R, T> {
    /// Create a new dataset from categories and targets
    ///
    /// The lengths are not checked here; encoders which require aligned targets report a
    /// mismatch when they are fitted.
    pub fn new(records: R, targets: T) -> DatasetBase<R, T> {
        DatasetBase { records, targets }
    }

    /// Return references to the categories
    pub fn records(&self) -> &R {
        &self.records
    }

    /// Return references to the targets
    pub fn targets(&self) -> &T {
        &self.targets
    }

    /// Number of observations
    pub fn nsamples(&self) -> usize {
        self.records.nsamples()
    }

    /// Replace the targets, keeping the categories
    pub fn with_targets<U>(self, targets: U) -> DatasetBase<R, U> {
        DatasetBase {
            records: self.records,
            targets,
        }
    }
}

impl<R: Records, T: Records> DatasetBase<R, T> {
    /// Fails with `Error::TargetLength` unless there is exactly one target per category
    pub fn check_target_length(&self) -> Result<()> {
        let (records, targets) = (self.records.nsamples(), self.targets.nsamples());
        if records != targets {
            return Err(Error::TargetLength { records, targets });
        }

        Ok(())
    }
}

impl<R: Records> From<R> for DatasetBase<R, ()> {
    fn from(records: R) -> Self {
        DatasetBase {
            records,
            targets: (),
        }
    }
}
