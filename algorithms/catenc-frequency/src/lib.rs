//! # Frequency encoding
//!
//! `catenc-frequency` provides two one-way encoders which replace a category by how often it
//! occurs:
//!
//! * [`FrequencyEncoder`] counts every category over the whole fitted batch and is looked up by
//! category
//! * [`RollingFrequencyEncoder`] counts within consecutive windows of a fixed number of
//! observations and is looked up by the position of an observation
//!
//! Both are fitted once and read-only afterwards. Several categories can share a code, so there
//! is no decoding.
mod error;
mod frequency;
mod hyperparams;
mod rolling;

pub use error::{FrequencyError, Result};
pub use frequency::{FrequencyEncoder, FrequencyParams};
pub use hyperparams::{RollingFrequencyParams, RollingFrequencyValidParams};
pub use rolling::RollingFrequencyEncoder;
