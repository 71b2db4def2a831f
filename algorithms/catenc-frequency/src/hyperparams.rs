use catenc::ParamGuard;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::error::FrequencyError;

/// A verified hyper-parameter set ready for fitting a rolling frequency encoder
///
/// See [`RollingFrequencyParams`](crate::RollingFrequencyParams) for more information.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RollingFrequencyValidParams {
    pub(crate) window: usize,
}

impl RollingFrequencyValidParams {
    pub fn window(&self) -> usize {
        self.window
    }
}

/// Rolling frequency encoder parameters
///
/// ### Attributes
///
/// * `window`: number of consecutive observations after which the counting table is cleared.
/// Must be positive.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RollingFrequencyParams(pub(crate) RollingFrequencyValidParams);

impl RollingFrequencyParams {
    /// Create parameters counting within windows of `window` observations
    pub fn new(window: usize) -> Self {
        Self(RollingFrequencyValidParams { window })
    }

    /// Set the window size
    pub fn window(mut self, window: usize) -> Self {
        self.0.window = window;
        self
    }
}

impl ParamGuard for RollingFrequencyParams {
    type Checked = RollingFrequencyValidParams;
    type Error = FrequencyError;

    fn check_ref(&self) -> Result<&Self::Checked, Self::Error> {
        if self.0.window == 0 {
            Err(FrequencyError::InvalidWindow(self.0.window))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}
