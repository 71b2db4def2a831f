//! Provide traits for the different encoder families
//!
//! Encoders come in two capabilities:
//!
//! * invertible encoders implement [`Encode`] and [`Decode`]; they grow a vocabulary while
//! encoding and can map every issued code back to its category
//! * forward-only encoders are fitted once from a batch and implement [`CategoryCodes`] (looked
//! up by category) or [`ObservationCodes`] (looked up by position in the fitted batch). Several
//! categories may share a code, so there is no way back.
//!
//! Every encoder which learns from a batch is constructed through [`Fit`] on its parameter set.
use crate::dataset::{DatasetBase, Records};
use crate::error::{Error, Result};
use ndarray::ArrayView1;
use std::fmt::Display;

/// Transformation from data to data
///
/// A transformer takes a dataset or record and transforms it into something else, while preserving
/// the observation ordering. For one-hot encoding a column of categories becomes a matrix.
pub trait Transformer<R, T> {
    fn transform(&self, x: R) -> T;
}

/// Fittable algorithms
///
/// A fittable algorithm takes a dataset and creates a concept of some kind about it. Every
/// encoder in this workspace is produced by fitting its parameter set to a column of categories,
/// optionally paired with targets.
pub trait Fit<R: Records, T, E: std::error::Error + From<crate::error::Error>> {
    type Object;

    fn fit(&self, dataset: &DatasetBase<R, T>) -> std::result::Result<Self::Object, E>;
}

/// Encode categories into codes, growing the encoder when a category is new
///
/// Encoding takes `&self`: implementors synchronize their vocabulary internally, so a single
/// encoder can be shared between threads.
pub trait Encode {
    type Code;

    /// Return the code of `value`, assigning a new one if `value` was not seen before
    fn encode(&self, value: &str) -> Self::Code;

    /// Encode every value in order
    fn encode_batch<T: AsRef<str>>(&self, values: &[T]) -> Vec<Self::Code> {
        values.iter().map(|v| self.encode(v.as_ref())).collect()
    }

    /// Encode the textual representation of `value`
    fn encode_display<T: Display + ?Sized>(&self, value: &T) -> Self::Code {
        self.encode(&value.to_string())
    }

    /// Whether `value` has already been assigned a code
    fn contains(&self, value: &str) -> bool;
}

/// Map codes issued by an [`Encode`] implementor back to their categories
pub trait Decode: Encode {
    type Error: std::error::Error;

    fn decode(&self, code: &Self::Code) -> std::result::Result<String, Self::Error>;

    /// Whether `code` is a code this encoder could have issued
    fn contains_code(&self, code: &Self::Code) -> bool;
}

/// Forward-only codes looked up by category
pub trait CategoryCodes {
    type Code;

    /// The fitted code of `value`, `None` if it was not part of the fitted batch
    fn get(&self, value: &str) -> Option<Self::Code>;
}

/// Forward-only codes aligned with the observations of the fitted batch
pub trait ObservationCodes {
    type Code: Copy;

    /// All codes, one per fitted observation
    fn codes(&self) -> ArrayView1<'_, Self::Code>;

    /// The code of the observation at `index`
    ///
    /// Fails with `Error::Bounds` if `index` lies outside `[0, len)`.
    fn get(&self, index: usize) -> Result<Self::Code> {
        let codes = self.codes();
        codes.get(index).copied().ok_or(Error::Bounds {
            index,
            len: codes.len(),
        })
    }

    fn len(&self) -> usize {
        self.codes().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
