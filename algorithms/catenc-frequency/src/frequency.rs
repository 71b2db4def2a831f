//! Frequency encoding
use std::collections::HashMap;

use catenc::dataset::DatasetBase;
use catenc::traits::{CategoryCodes, Fit, Transformer};
use log::debug;
use ndarray::{Array1, ArrayBase, Data, Ix1};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::error::{FrequencyError, Result};

/// Frequency encoder parameters
///
/// The frequency encoder has no hyper-parameters, fitting only counts the categories.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrequencyParams;

/// Frequency encoder: every category is encoded by the number of times it occurred in the fitted
/// batch.
///
/// This is a one-way encoder, distinct categories with the same frequency share a code. Lookups
/// never change the fitted counts.
///
/// ### Example
///
/// ```rust
/// use catenc::prelude::*;
/// use catenc_frequency::FrequencyEncoder;
/// use ndarray::array;
///
/// let dataset: DatasetBase<_, ()> = array!["a", "b", "a", "c", "a"].into();
/// let encoder = FrequencyEncoder::params().fit(&dataset).unwrap();
/// assert_eq!(encoder.get("a"), Some(3));
/// assert_eq!(encoder.get("d"), None);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct FrequencyEncoder {
    counts: HashMap<String, usize>,
    n_observations: usize,
}

impl FrequencyEncoder {
    pub fn params() -> FrequencyParams {
        FrequencyParams
    }

    /// Number of occurrences of `value` in the fitted batch
    pub fn get(&self, value: &str) -> Option<usize> {
        self.counts.get(value).copied()
    }

    /// Number of distinct categories
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of observations in the fitted batch
    pub fn n_observations(&self) -> usize {
        self.n_observations
    }
}

impl<D: Data, T> Fit<ArrayBase<D, Ix1>, T, FrequencyError> for FrequencyParams
where
    D::Elem: AsRef<str>,
{
    type Object = FrequencyEncoder;

    fn fit(&self, dataset: &DatasetBase<ArrayBase<D, Ix1>, T>) -> Result<Self::Object> {
        let mut counts = HashMap::new();
        for value in dataset.records().iter() {
            *counts.entry(value.as_ref().to_string()).or_insert(0) += 1;
        }
        debug!(
            "fitted frequency encoder with {} categories from {} observations",
            counts.len(),
            dataset.nsamples()
        );

        Ok(FrequencyEncoder {
            counts,
            n_observations: dataset.nsamples(),
        })
    }
}

impl CategoryCodes for FrequencyEncoder {
    type Code = usize;

    fn get(&self, value: &str) -> Option<usize> {
        self.counts.get(value).copied()
    }
}

/// Counts of every category in `x`, categories absent from the fitted batch count zero
impl<'a, D: Data> Transformer<&'a ArrayBase<D, Ix1>, Array1<usize>> for FrequencyEncoder
where
    D::Elem: AsRef<str>,
{
    fn transform(&self, x: &'a ArrayBase<D, Ix1>) -> Array1<usize> {
        x.map(|v| self.get(v.as_ref()).unwrap_or(0))
    }
}
