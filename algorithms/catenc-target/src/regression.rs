//! James–Stein encoding of categories paired with continuous targets
use std::collections::HashMap;
use std::marker::PhantomData;

use catenc::dataset::DatasetBase;
use catenc::error::{Error, Result};
use catenc::traits::{CategoryCodes, Fit, Transformer};
use catenc::Float;
use log::debug;
use ndarray::{Array1, ArrayBase, Data, Ix1};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Parameters of the regression target encoder
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct JamesSteinRegressionParams<F>(PhantomData<F>);

/// Target encoder for continuous targets
///
/// Every category is encoded by the mean of the targets observed together with it. This is a
/// plain mean encoding: the per-category estimate is not shrunk towards the global mean. The
/// global mean is kept and used for categories that were not part of the fitted batch when a
/// column is transformed.
///
/// ### Example
///
/// ```rust
/// use catenc::prelude::*;
/// use catenc_target::JamesSteinRegression;
/// use ndarray::array;
///
/// let dataset = Dataset::new(array!["a", "b", "a"], array![2.0, 7.0, 4.0]);
/// let encoder = JamesSteinRegression::params().fit(&dataset).unwrap();
/// assert_eq!(encoder.get("a"), Some(3.0));
/// assert_eq!(encoder.get("c"), None);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct JamesSteinRegression<F> {
    encoding: HashMap<String, F>,
    global_mean: F,
}

impl<F: Float> JamesSteinRegression<F> {
    pub fn params() -> JamesSteinRegressionParams<F> {
        JamesSteinRegressionParams(PhantomData)
    }

    /// Mean target of `value`, `None` if it was not part of the fitted batch
    pub fn get(&self, value: &str) -> Option<F> {
        self.encoding.get(value).copied()
    }

    /// Mean of all fitted targets
    pub fn global_mean(&self) -> F {
        self.global_mean
    }

    /// Number of distinct categories
    pub fn len(&self) -> usize {
        self.encoding.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encoding.is_empty()
    }
}

impl<F: Float, D: Data, DT: Data<Elem = F>> Fit<ArrayBase<D, Ix1>, ArrayBase<DT, Ix1>, Error>
    for JamesSteinRegressionParams<F>
where
    D::Elem: AsRef<str>,
{
    type Object = JamesSteinRegression<F>;

    /// Fails with `Error::TargetLength` unless there is one target per category
    fn fit(
        &self,
        dataset: &DatasetBase<ArrayBase<D, Ix1>, ArrayBase<DT, Ix1>>,
    ) -> Result<Self::Object> {
        dataset.check_target_length()?;

        // category -> (sum of targets, number of targets)
        let mut sums: HashMap<&str, (F, usize)> = HashMap::new();
        for (value, &target) in dataset.records().iter().zip(dataset.targets().iter()) {
            let entry = sums.entry(value.as_ref()).or_insert((F::zero(), 0));
            entry.0 += target;
            entry.1 += 1;
        }

        let global_mean = if dataset.nsamples() > 0 {
            dataset.targets().sum() / F::cast(dataset.nsamples())
        } else {
            F::zero()
        };
        let encoding = sums
            .into_iter()
            .map(|(value, (sum, count))| (value.to_string(), sum / F::cast(count)))
            .collect::<HashMap<_, _>>();
        debug!(
            "fitted regression target encoder with {} categories, global mean {}",
            encoding.len(),
            global_mean
        );

        Ok(JamesSteinRegression {
            encoding,
            global_mean,
        })
    }
}

impl<F: Float> CategoryCodes for JamesSteinRegression<F> {
    type Code = F;

    fn get(&self, value: &str) -> Option<F> {
        self.encoding.get(value).copied()
    }
}

/// Encode a column of categories, unseen categories are encoded by the global mean
impl<'a, F: Float, D: Data> Transformer<&'a ArrayBase<D, Ix1>, Array1<F>>
    for JamesSteinRegression<F>
where
    D::Elem: AsRef<str>,
{
    fn transform(&self, x: &'a ArrayBase<D, Ix1>) -> Array1<F> {
        x.map(|v| self.get(v.as_ref()).unwrap_or(self.global_mean))
    }
}
