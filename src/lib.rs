//! `catenc` provides categorical encoders for the preprocessing step that turns string-valued
//! features into numbers before a model consumes them.
//!
//! ## The Big Picture
//!
//! The workspace is split the usual way: this crate holds the shared pieces, the encoders live
//! in their own crates under `algorithms/`.
//!
//! * `catenc` (this crate): the error type, datasets, the [`traits`] every encoder implements,
//! hyper-parameter checking and the thread-safe [`Vocabulary`](vocabulary::Vocabulary) store
//! together with its JSON, CSV and binary export
//! * `catenc-ordinal`: ordinal and one-hot encoders, both invertible
//! * `catenc-frequency`: frequency and rolling-frequency encoders, forward-only
//! * `catenc-target`: James–Stein target encoders for regression and classification targets,
//! forward-only
//!
//! Invertible encoders keep growing while they encode and can decode every code they issued.
//! Forward-only encoders are fitted once from a batch of observations and are read-only
//! afterwards.

pub mod dataset;
pub mod error;
mod param_guard;
pub mod prelude;
pub mod traits;
pub mod vocabulary;

pub use dataset::{Dataset, DatasetBase, Float, Label};
pub use param_guard::ParamGuard;
