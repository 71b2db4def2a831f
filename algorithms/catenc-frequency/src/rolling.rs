//! Rolling frequency encoding
use std::collections::HashMap;

use catenc::dataset::DatasetBase;
use catenc::error::Result;
use catenc::traits::{Fit, ObservationCodes};
use log::debug;
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Ix1};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::error::FrequencyError;
use crate::hyperparams::{RollingFrequencyParams, RollingFrequencyValidParams};

/// Rolling frequency encoder: every observation is encoded by the number of times its category
/// occurred so far within the current window.
///
/// The batch is split into consecutive windows of `window` observations, by position only. The
/// count of an observation includes the observation itself, so the first occurrence of a
/// category in a window is encoded as `1`.
///
/// This is a one-way encoder. Codes are looked up by the position of the observation in the
/// fitted batch.
///
/// ### Example
///
/// ```rust
/// use catenc::prelude::*;
/// use catenc_frequency::RollingFrequencyEncoder;
/// use ndarray::array;
///
/// let dataset: DatasetBase<_, ()> = array!["x", "x", "y", "x", "y", "y"].into();
/// let encoder = RollingFrequencyEncoder::params(3).fit(&dataset).unwrap();
/// assert_eq!(encoder.codes(), array![1, 2, 1, 1, 1, 2]);
/// assert!(encoder.get(6).is_err());
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct RollingFrequencyEncoder {
    window: usize,
    codes: Array1<usize>,
}

impl RollingFrequencyEncoder {
    /// Parameters for counting within windows of `window` observations
    pub fn params(window: usize) -> RollingFrequencyParams {
        RollingFrequencyParams::new(window)
    }

    /// The window size used while fitting
    pub fn window(&self) -> usize {
        self.window
    }

    /// Codes of all fitted observations, in order
    pub fn codes(&self) -> ArrayView1<'_, usize> {
        self.codes.view()
    }

    /// Code of the observation at `index`, fails with `Error::Bounds` outside `[0, len)`
    pub fn get(&self, index: usize) -> Result<usize> {
        ObservationCodes::get(self, index)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl<D: Data, T> Fit<ArrayBase<D, Ix1>, T, FrequencyError> for RollingFrequencyValidParams
where
    D::Elem: AsRef<str>,
{
    type Object = RollingFrequencyEncoder;

    fn fit(
        &self,
        dataset: &DatasetBase<ArrayBase<D, Ix1>, T>,
    ) -> std::result::Result<Self::Object, FrequencyError> {
        let window = self.window();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let codes = dataset
            .records()
            .iter()
            .enumerate()
            .map(|(index, value)| {
                if index % window == 0 {
                    counts.clear();
                }
                let count = counts.entry(value.as_ref()).or_insert(0);
                *count += 1;
                *count
            })
            .collect::<Array1<_>>();
        debug!(
            "fitted rolling frequency encoder with window {} over {} observations",
            window,
            codes.len()
        );

        Ok(RollingFrequencyEncoder { window, codes })
    }
}

impl ObservationCodes for RollingFrequencyEncoder {
    type Code = usize;

    fn codes(&self) -> ArrayView1<'_, usize> {
        self.codes.view()
    }
}
