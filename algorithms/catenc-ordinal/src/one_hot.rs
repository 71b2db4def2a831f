//! One-hot encoding
use catenc::error::{Error, Result};
use catenc::traits::{Decode, Encode, Transformer};
use catenc::vocabulary::{PersistVocabulary, Vocabulary};
use ndarray::{Array1, Array2, ArrayBase, Data, Ix1};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::OneHotParams;

/// One-hot encoder: every distinct category occupies one dimension of a binary codeword.
///
/// The dimension of the codewords equals the number of known categories and grows with every new
/// category. Codewords issued earlier keep their length; a codeword is still decodable as long as
/// it covers the current dimension, so callers that need a fixed width should re-encode (or use
/// the [`Transformer`] implementation, which pads a whole batch to the final dimension).
///
/// ### Example
///
/// ```rust
/// use catenc_ordinal::OneHotEncoder;
/// use ndarray::array;
///
/// let encoder = OneHotEncoder::new(false);
/// assert_eq!(encoder.encode("cat"), array![1]);
/// assert_eq!(encoder.encode("dog"), array![0, 1]);
/// assert_eq!(encoder.decode(&array![0, 1]).unwrap(), "dog");
/// assert!(encoder.decode(&array![1]).is_err());
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", transparent)
)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OneHotEncoder {
    vocabulary: Vocabulary,
}

/// Codeword of length `dimension` with a single one at `code`
fn codeword(code: usize, dimension: usize) -> Array1<u8> {
    let mut codeword = Array1::zeros(dimension);
    codeword[code] = 1;
    codeword
}

impl OneHotEncoder {
    /// Parameters for fitting an encoder to a column of categories
    pub fn params() -> OneHotParams {
        OneHotParams::default()
    }

    /// Create an empty encoder, with the empty string as first dimension if `reserve_empty` is
    /// true
    pub fn new(reserve_empty: bool) -> Self {
        let vocabulary = if reserve_empty {
            Vocabulary::with_empty()
        } else {
            Vocabulary::new()
        };

        OneHotEncoder { vocabulary }
    }

    /// Codeword of `value`, as long as the dimension right after `value` was assigned
    pub fn encode(&self, value: &str) -> Array1<u8> {
        let (code, dimension) = self.vocabulary.encode_with_len(value);
        codeword(code, dimension)
    }

    /// Category of the first set dimension of `codeword`
    ///
    /// Fails with `Error::CodewordLength` if the codeword is shorter than the current dimension.
    /// A codeword without any set dimension inside the vocabulary decodes to the empty string.
    pub fn decode<S: Data<Elem = u8>>(&self, codeword: &ArrayBase<S, Ix1>) -> Result<String> {
        let dimension = self.dimension();
        if codeword.len() < dimension {
            return Err(Error::CodewordLength {
                expected: dimension,
                found: codeword.len(),
            });
        }

        Ok(codeword
            .iter()
            .position(|&bit| bit == 1)
            .map(|dim| self.vocabulary.decode(dim))
            .unwrap_or_default())
    }

    /// A codeword is valid if it covers the current dimension and holds exactly one `1`, every
    /// other entry being `0`
    pub fn contains_code<S: Data<Elem = u8>>(&self, codeword: &ArrayBase<S, Ix1>) -> bool {
        codeword.len() >= self.dimension() && is_one_hot(codeword)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.vocabulary.contains(value)
    }

    /// Current length of the codewords
    pub fn dimension(&self) -> usize {
        self.vocabulary.len()
    }

    /// The dimension assigned to `value`, without growing the encoder
    pub fn position(&self, value: &str) -> Option<usize> {
        self.vocabulary.code(value)
    }

    /// All categories in dimension order
    pub fn list(&self) -> Vec<String> {
        self.vocabulary.list()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}

fn is_one_hot<S: Data<Elem = u8>>(codeword: &ArrayBase<S, Ix1>) -> bool {
    let mut ones = 0;
    for &bit in codeword {
        match bit {
            0 => {}
            1 => ones += 1,
            _ => return false,
        }
    }

    ones == 1
}

impl Encode for OneHotEncoder {
    type Code = Array1<u8>;

    fn encode(&self, value: &str) -> Array1<u8> {
        OneHotEncoder::encode(self, value)
    }

    fn contains(&self, value: &str) -> bool {
        self.vocabulary.contains(value)
    }
}

impl Decode for OneHotEncoder {
    type Error = Error;

    fn decode(&self, code: &Array1<u8>) -> Result<String> {
        OneHotEncoder::decode(self, code)
    }

    fn contains_code(&self, code: &Array1<u8>) -> bool {
        OneHotEncoder::contains_code(self, code)
    }
}

impl PersistVocabulary for OneHotEncoder {
    fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    fn from_vocabulary(vocabulary: Vocabulary) -> Self {
        OneHotEncoder { vocabulary }
    }
}

/// Encode a column of categories into a `(nsamples, dimension)` matrix
///
/// Every row has the same width: the dimension after all categories of the column have been
/// encoded.
impl<'a, D: Data> Transformer<&'a ArrayBase<D, Ix1>, Array2<u8>> for OneHotEncoder
where
    D::Elem: AsRef<str>,
{
    fn transform(&self, x: &'a ArrayBase<D, Ix1>) -> Array2<u8> {
        let values: Vec<&str> = x.iter().map(|v| v.as_ref()).collect();
        let codes = self.vocabulary.encode_batch(&values);
        let dimension = codes.iter().max().map_or(0, |&code| code + 1);

        let mut encoded = Array2::zeros((codes.len(), dimension.max(self.dimension())));
        for (row, code) in codes.into_iter().enumerate() {
            encoded[(row, code)] = 1;
        }
        encoded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catenc::dataset::DatasetBase;
    use catenc::traits::Fit;
    use ndarray::array;

    #[test]
    fn test_one_hot_encode_grows_dimension() {
        let encoder = OneHotEncoder::new(false);
        assert_eq!(encoder.encode("a"), array![1]);
        assert_eq!(encoder.encode("b"), array![0, 1]);
        assert_eq!(encoder.encode("a"), array![1, 0]);
        assert_eq!(encoder.encode("c"), array![0, 0, 1]);
        assert_eq!(encoder.dimension(), 3);
        assert_eq!(encoder.position("b"), Some(1));
        assert_eq!(encoder.position("z"), None);
    }

    #[test]
    fn test_reserved_empty_dimension() {
        let encoder = OneHotEncoder::new(true);
        assert_eq!(encoder.dimension(), 1);
        assert_eq!(encoder.encode(""), array![1]);
        assert_eq!(encoder.encode("hello world"), array![0, 1]);
    }

    #[test]
    fn test_one_hot_round_trip() {
        let encoder = OneHotEncoder::new(false);
        let values = ["north", "south", "east", "west"];
        for value in values.iter() {
            encoder.encode(value);
        }
        for value in values.iter() {
            let code = encoder.encode(value);
            assert_eq!(code.iter().filter(|&&bit| bit == 1).count(), 1);
            assert_eq!(&encoder.decode(&code).unwrap(), value);
        }
    }

    #[test]
    fn test_stale_codeword_is_rejected() {
        let encoder = OneHotEncoder::new(false);
        let stale = encoder.encode("first");
        encoder.encode("second");

        match encoder.decode(&stale) {
            Err(Error::CodewordLength { expected, found }) => {
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("expected codeword length error, got {:?}", other),
        }
        assert!(!encoder.contains_code(&stale));

        // re-deriving at the current dimension makes it valid again
        let padded = array![1, 0];
        assert!(encoder.contains_code(&padded));
        assert_eq!(encoder.decode(&padded).unwrap(), "first");
    }

    #[test]
    fn test_contains_code() {
        let encoder = OneHotEncoder::new(false);
        encoder.encode("a");
        encoder.encode("b");

        assert!(encoder.contains_code(&array![0, 1]));
        assert!(encoder.contains_code(&array![0, 1, 0]));
        assert!(!encoder.contains_code(&array![0, 0]));
        assert!(!encoder.contains_code(&array![1, 1]));
        assert!(!encoder.contains_code(&array![2, 0]));
        assert!(!encoder.contains_code(&array![1]));
    }

    #[test]
    fn test_decode_without_set_dimension() {
        let encoder = OneHotEncoder::new(false);
        encoder.encode("a");
        assert_eq!(encoder.decode(&array![0]).unwrap(), "");
        assert_eq!(encoder.decode(&array![0, 1]).unwrap(), "");
        assert_eq!(encoder.decode(&array![1, 1]).unwrap(), "a");
    }

    #[test]
    fn test_fit_and_transform_fixed_width() {
        let dataset: DatasetBase<_, ()> = array!["x", "y", "x"].into();
        let encoder = OneHotEncoder::params().fit(&dataset).unwrap();
        assert_eq!(encoder.dimension(), 2);

        let encoded = encoder.transform(&array!["y", "z", "x"]);
        assert_eq!(encoded, array![[0, 1, 0], [0, 0, 1], [1, 0, 0]]);
        assert_eq!(encoder.dimension(), 3);
    }

    #[test]
    fn test_one_hot_persistence() {
        let encoder = OneHotEncoder::new(true);
        encoder.encode("alpha");
        encoder.encode("beta");

        let json = OneHotEncoder::from_json(&encoder.to_json().unwrap()).unwrap();
        let csv = OneHotEncoder::from_csv(&encoder.to_csv().unwrap()).unwrap();
        let binary = OneHotEncoder::from_bytes(&encoder.to_bytes().unwrap()).unwrap();

        for restored in [json, csv, binary].iter() {
            assert_eq!(restored.dimension(), 3);
            assert_eq!(restored.decode(&array![0, 0, 1]).unwrap(), "beta");
            assert_eq!(restored.encode("alpha"), array![0, 1, 0]);
        }
    }
}
