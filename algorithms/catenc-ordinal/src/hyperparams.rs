use std::marker::PhantomData;

use catenc::dataset::DatasetBase;
use catenc::error::{Error, Result};
use catenc::traits::Fit;
use log::debug;
use ndarray::{ArrayBase, Data, Ix1};

use crate::{OneHotEncoder, OrdinalEncoder};

/// Parameters shared by the vocabulary-backed encoders
///
/// Fitting creates a new encoder and encodes every category of the dataset in order, so the
/// codes follow first appearance in the fitted column. The encoder keeps growing afterwards.
///
/// ### Attributes
///
/// * `reserve_empty`: if true, the empty string is encoded first and always holds code `0`
/// (resp. the first one-hot dimension). Defaults to `false`.
#[derive(Clone, Debug, PartialEq)]
pub struct VocabularyParams<E> {
    reserve_empty: bool,
    encoder: PhantomData<E>,
}

/// Parameters of an [`OrdinalEncoder`]
pub type OrdinalParams = VocabularyParams<OrdinalEncoder>;

/// Parameters of a [`OneHotEncoder`]
pub type OneHotParams = VocabularyParams<OneHotEncoder>;

impl<E> Default for VocabularyParams<E> {
    fn default() -> Self {
        Self {
            reserve_empty: false,
            encoder: PhantomData,
        }
    }
}

impl<E> VocabularyParams<E> {
    /// Reserve the first code for the empty string
    pub fn reserve_empty(mut self, reserve_empty: bool) -> Self {
        self.reserve_empty = reserve_empty;
        self
    }

    pub fn reserves_empty(&self) -> bool {
        self.reserve_empty
    }
}

impl<D: Data, T> Fit<ArrayBase<D, Ix1>, T, Error> for OrdinalParams
where
    D::Elem: AsRef<str>,
{
    type Object = OrdinalEncoder;

    fn fit(&self, dataset: &DatasetBase<ArrayBase<D, Ix1>, T>) -> Result<Self::Object> {
        let encoder = OrdinalEncoder::new(self.reserve_empty);
        let values: Vec<&str> = dataset.records().iter().map(|v| v.as_ref()).collect();
        encoder.vocabulary().encode_batch(&values);
        debug!(
            "fitted ordinal encoder with {} codes from {} observations",
            encoder.len(),
            values.len()
        );

        Ok(encoder)
    }
}

impl<D: Data, T> Fit<ArrayBase<D, Ix1>, T, Error> for OneHotParams
where
    D::Elem: AsRef<str>,
{
    type Object = OneHotEncoder;

    fn fit(&self, dataset: &DatasetBase<ArrayBase<D, Ix1>, T>) -> Result<Self::Object> {
        let encoder = OneHotEncoder::new(self.reserve_empty);
        let values: Vec<&str> = dataset.records().iter().map(|v| v.as_ref()).collect();
        encoder.vocabulary().encode_batch(&values);
        debug!(
            "fitted one-hot encoder with {} dimensions from {} observations",
            encoder.dimension(),
            values.len()
        );

        Ok(encoder)
    }
}
