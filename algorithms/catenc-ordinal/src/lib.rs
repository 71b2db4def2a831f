//! # Ordinal and one-hot encoding
//!
//! `catenc-ordinal` provides the two invertible encoders of the `catenc` workspace. Both are
//! backed by a [`Vocabulary`](catenc::vocabulary::Vocabulary): categories receive dense codes in
//! first-seen order, the encoders grow while encoding and every issued code can be decoded again.
//!
//! * [`OrdinalEncoder`] maps a category to its integer code
//! * [`OneHotEncoder`] maps a category to a binary codeword with a single one at the category's
//! dimension
//!
//! Both can be fitted to a column of categories, shared between threads and persisted through
//! [`PersistVocabulary`](catenc::vocabulary::PersistVocabulary).
//!
//! ```rust
//! use catenc::prelude::*;
//! use catenc_ordinal::OrdinalEncoder;
//! use ndarray::array;
//!
//! let dataset: DatasetBase<_, ()> = array!["paris", "rome", "paris"].into();
//! let encoder = OrdinalEncoder::params().fit(&dataset).unwrap();
//!
//! let csv = encoder.to_csv().unwrap();
//! let restored = OrdinalEncoder::from_csv(&csv).unwrap();
//! assert_eq!(restored.decode(1), "rome");
//! ```
mod hyperparams;
mod one_hot;
mod ordinal;

pub use hyperparams::{OneHotParams, OrdinalParams, VocabularyParams};
pub use one_hot::OneHotEncoder;
pub use ordinal::OrdinalEncoder;
