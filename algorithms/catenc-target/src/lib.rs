//! # Target encoding
//!
//! `catenc-target` encodes categories by what is observed together with them, a continuous target
//! or a class label. Both encoders are fitted once on a [`Dataset`](catenc::Dataset) pairing every
//! category with its target and are read-only afterwards.
//!
//! * [`JamesSteinRegression`] maps every category to the mean of its targets
//! * [`JamesSteinClassification`] computes the James–Stein shrinkage weight of every
//! (category, class) pair and encodes each fitted observation by the weight of its pair
//!
//! A category and its target must line up one to one, fitting fails with
//! [`Error::TargetLength`](catenc::error::Error::TargetLength) otherwise.
mod classification;
mod regression;

pub use classification::{JamesSteinClassification, JamesSteinClassificationParams};
pub use regression::{JamesSteinRegression, JamesSteinRegressionParams};
