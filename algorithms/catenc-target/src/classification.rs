//! James–Stein encoding of categories paired with class labels
use std::collections::HashMap;
use std::marker::PhantomData;

use catenc::dataset::{DatasetBase, Label};
use catenc::error::{Error, Result};
use catenc::traits::{Fit, ObservationCodes};
use catenc::Float;
use log::debug;
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Ix1};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Parameters of the classification target encoder
///
/// Carries the code type `F` and the class label type `L` of the encoder it fits.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JamesSteinClassificationParams<F, L>(PhantomData<(F, L)>);

/// Target encoder for class labels
///
/// Every (category, class) pair observed together is assigned the James–Stein shrinkage weight
///
/// ```text
/// B = var(group, class) / (var(group, class) + var(class))
/// ```
///
/// with
///
/// * `var(group, class) = p (1 - p) / n_group`, `p = n(group, class) / n_class`
/// * `var(class) = q (1 - q) / n`, `q = n_class / n`
///
/// where `n_group` counts the observations of the category, `n_class` the observations of the
/// class over the whole batch and `n` all observations. `B` lies in `[0, 1]`; when both variances
/// vanish `B` is `0`.
///
/// The encoder produces one code per fitted observation, the weight of its (category, class)
/// pair. It is one-way: nothing maps a code back to a category.
///
/// ### Example
///
/// ```rust
/// use catenc::prelude::*;
/// use catenc_target::JamesSteinClassification;
/// use ndarray::array;
///
/// let dataset = Dataset::new(array!["a", "a", "b", "b", "b"], array![1, 0, 1, 1, 0]);
/// let encoder: JamesSteinClassification<f64, usize> =
///     JamesSteinClassification::params().fit(&dataset).unwrap();
///
/// assert_eq!(encoder.len(), 5);
/// assert!((encoder.get(0).unwrap() - 125. / 179.).abs() < 1e-12);
/// assert_eq!(encoder.weight("a", &1), encoder.get(0).ok());
/// assert!(encoder.get(5).is_err());
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct JamesSteinClassification<F, L: Label> {
    codes: Array1<F>,
    weights: HashMap<String, HashMap<L, F>>,
}

impl<F: Float, L: Label> JamesSteinClassification<F, L> {
    pub fn params() -> JamesSteinClassificationParams<F, L> {
        JamesSteinClassificationParams(PhantomData)
    }

    /// Codes of all fitted observations, in order
    pub fn codes(&self) -> ArrayView1<'_, F> {
        self.codes.view()
    }

    /// Code of the observation at `index`, fails with `Error::Bounds` outside `[0, len)`
    pub fn get(&self, index: usize) -> Result<F> {
        ObservationCodes::get(self, index)
    }

    /// Shrinkage weight of a (category, class) pair, `None` if the pair was never observed
    pub fn weight(&self, group: &str, class: &L) -> Option<F> {
        self.weights.get(group)?.get(class).copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Shrinkage weight of a single (group, class) pair
fn shrinkage<F: Float>(pair_count: usize, group_count: usize, class_count: usize, total: usize) -> F {
    let (pair_count, group_count) = (F::cast(pair_count), F::cast(group_count));
    let (class_count, total) = (F::cast(class_count), F::cast(total));

    let group_class_percentage = pair_count / class_count;
    let class_percentage = class_count / total;
    let group_class_variance =
        group_class_percentage * (F::one() - group_class_percentage) / group_count;
    let class_variance = class_percentage * (F::one() - class_percentage) / total;

    let variance = group_class_variance + class_variance;
    if variance > F::zero() {
        group_class_variance / variance
    } else {
        F::zero()
    }
}

impl<F: Float, L: Label, D: Data, DT: Data<Elem = L>>
    Fit<ArrayBase<D, Ix1>, ArrayBase<DT, Ix1>, Error> for JamesSteinClassificationParams<F, L>
where
    D::Elem: AsRef<str>,
{
    type Object = JamesSteinClassification<F, L>;

    /// Fails with `Error::TargetLength` unless there is one class label per category
    fn fit(
        &self,
        dataset: &DatasetBase<ArrayBase<D, Ix1>, ArrayBase<DT, Ix1>>,
    ) -> Result<Self::Object> {
        dataset.check_target_length()?;
        let total = dataset.nsamples();

        let mut group_counts: HashMap<&str, usize> = HashMap::new();
        let mut class_counts: HashMap<&L, usize> = HashMap::new();
        let mut pair_counts: HashMap<(&str, &L), usize> = HashMap::new();
        for (group, class) in dataset.records().iter().zip(dataset.targets().iter()) {
            let group = group.as_ref();
            *group_counts.entry(group).or_insert(0) += 1;
            *class_counts.entry(class).or_insert(0) += 1;
            *pair_counts.entry((group, class)).or_insert(0) += 1;
        }

        let pair_weights = pair_counts
            .into_iter()
            .map(|((group, class), count)| {
                let weight = shrinkage(count, group_counts[group], class_counts[class], total);
                ((group, class), weight)
            })
            .collect::<HashMap<_, F>>();

        let codes = dataset
            .records()
            .iter()
            .zip(dataset.targets().iter())
            .map(|(group, class)| pair_weights[&(group.as_ref(), class)])
            .collect::<Array1<_>>();

        let mut weights: HashMap<String, HashMap<L, F>> = HashMap::new();
        for ((group, class), weight) in pair_weights {
            weights
                .entry(group.to_string())
                .or_default()
                .insert(class.clone(), weight);
        }
        debug!(
            "fitted classification target encoder with {} categories and {} classes over {} observations",
            group_counts.len(),
            class_counts.len(),
            total
        );

        Ok(JamesSteinClassification { codes, weights })
    }
}

impl<F: Float, L: Label> ObservationCodes for JamesSteinClassification<F, L> {
    type Code = F;

    fn codes(&self) -> ArrayView1<'_, F> {
        self.codes.view()
    }
}
