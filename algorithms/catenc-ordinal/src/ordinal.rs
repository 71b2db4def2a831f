//! Ordinal encoding
use std::convert::Infallible;

use catenc::traits::{Decode, Encode, Transformer};
use catenc::vocabulary::{PersistVocabulary, Vocabulary};
use ndarray::{Array1, ArrayBase, Data, Ix1};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::OrdinalParams;

/// Ordinal encoder: every distinct category is assigned the next unused integer code.
///
/// Codes are dense and follow first appearance. Encoding an unseen category grows the encoder,
/// which is safe to do from several threads at once. Decoding an unknown code yields the empty
/// string instead of an error.
///
/// ### Example
///
/// ```rust
/// use catenc_ordinal::OrdinalEncoder;
///
/// let encoder = OrdinalEncoder::new(false);
/// assert_eq!(encoder.encode("hello world"), 0);
/// assert_eq!(encoder.encode("hello"), 1);
/// assert_eq!(encoder.decode(0), "hello world");
/// assert_eq!(encoder.decode(5), "");
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", transparent)
)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrdinalEncoder {
    vocabulary: Vocabulary,
}

impl OrdinalEncoder {
    /// Parameters for fitting an encoder to a column of categories
    pub fn params() -> OrdinalParams {
        OrdinalParams::default()
    }

    /// Create an empty encoder, with the empty string at code `0` if `reserve_empty` is true
    pub fn new(reserve_empty: bool) -> Self {
        let vocabulary = if reserve_empty {
            Vocabulary::with_empty()
        } else {
            Vocabulary::new()
        };

        OrdinalEncoder { vocabulary }
    }

    pub fn encode(&self, value: &str) -> usize {
        self.vocabulary.encode(value)
    }

    /// Encode raw bytes, replacing invalid UTF-8 sequences
    pub fn encode_bytes(&self, value: &[u8]) -> usize {
        self.vocabulary.encode(&String::from_utf8_lossy(value))
    }

    pub fn encode_batch<T: AsRef<str>>(&self, values: &[T]) -> Vec<usize> {
        self.vocabulary.encode_batch(values)
    }

    /// Returns the empty string if `code` was never issued
    pub fn decode(&self, code: usize) -> String {
        self.vocabulary.decode(code)
    }

    /// Decode every code, unknown codes become empty strings
    pub fn decode_batch(&self, codes: &[usize]) -> Vec<String> {
        self.vocabulary.decode_batch(codes)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.vocabulary.contains(value)
    }

    /// A code is valid if it lies in `[0, len)`
    pub fn contains_code(&self, code: usize) -> bool {
        self.vocabulary.contains_code(code)
    }

    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }

    /// All categories in code order
    pub fn list(&self) -> Vec<String> {
        self.vocabulary.list()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}

impl Encode for OrdinalEncoder {
    type Code = usize;

    fn encode(&self, value: &str) -> usize {
        self.vocabulary.encode(value)
    }

    fn encode_batch<T: AsRef<str>>(&self, values: &[T]) -> Vec<usize> {
        self.vocabulary.encode_batch(values)
    }

    fn contains(&self, value: &str) -> bool {
        self.vocabulary.contains(value)
    }
}

impl Decode for OrdinalEncoder {
    type Error = Infallible;

    fn decode(&self, code: &usize) -> Result<String, Infallible> {
        Ok(self.vocabulary.decode(*code))
    }

    fn contains_code(&self, code: &usize) -> bool {
        self.vocabulary.contains_code(*code)
    }
}

impl PersistVocabulary for OrdinalEncoder {
    fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    fn from_vocabulary(vocabulary: Vocabulary) -> Self {
        OrdinalEncoder { vocabulary }
    }
}

/// Encode a column of categories, growing the encoder with unseen ones
impl<'a, D: Data> Transformer<&'a ArrayBase<D, Ix1>, Array1<usize>> for OrdinalEncoder
where
    D::Elem: AsRef<str>,
{
    fn transform(&self, x: &'a ArrayBase<D, Ix1>) -> Array1<usize> {
        let values: Vec<&str> = x.iter().map(|v| v.as_ref()).collect();
        Array1::from(self.vocabulary.encode_batch(&values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catenc::dataset::DatasetBase;
    use catenc::traits::Fit;
    use ndarray::array;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_new_ordinal() {
        let encoder = OrdinalEncoder::new(false);
        assert!(encoder.is_empty());

        let encoder = OrdinalEncoder::new(true);
        assert_eq!(encoder.len(), 1);
        assert_eq!(encoder.decode(0), "");
    }

    #[test]
    fn test_ordinal_encode() {
        let encoder = OrdinalEncoder::new(false);
        assert_eq!(encoder.encode("hello world"), 0);

        let encoder = OrdinalEncoder::new(true);
        assert_eq!(encoder.encode("hello world"), 1);
        assert_eq!(encoder.encode("hello world"), 1);
        assert_eq!(encoder.len(), 2);
    }

    #[test]
    fn test_ordinal_decode() {
        for reserve_empty in [false, true] {
            let encoder = OrdinalEncoder::new(reserve_empty);
            let value = "hello world";
            let code = encoder.encode(value);
            assert_eq!(encoder.decode(code), value);
            assert_eq!(Decode::decode(&encoder, &code).unwrap(), value);
        }
    }

    #[test]
    fn test_codes_are_dense() {
        let encoder = OrdinalEncoder::new(false);
        let codes = encoder.encode_batch(&["b", "a", "b", "c", "a", "d"]);
        assert_eq!(codes, vec![0, 1, 0, 2, 1, 3]);
        assert_eq!(encoder.list(), vec!["b", "a", "c", "d"]);
        assert!((0..4).all(|code| encoder.contains_code(code)));
        assert!(!encoder.contains_code(4));
    }

    #[test]
    fn test_decode_batch_keeps_going_on_unknown_codes() {
        let encoder = OrdinalEncoder::new(false);
        encoder.encode_batch(&["x", "y"]);
        assert_eq!(
            encoder.decode_batch(&[1, 9, 0]),
            vec!["y".to_string(), String::new(), "x".to_string()]
        );
    }

    #[test]
    fn test_encode_bytes_and_display() {
        let encoder = OrdinalEncoder::new(false);
        assert_eq!(encoder.encode_bytes(b"42"), 0);
        assert_eq!(encoder.encode_display(&42), 0);
        assert_eq!(encoder.encode_display("forty-two"), 1);
        assert!(encoder.contains("forty-two"));
    }

    #[test]
    fn test_fit_and_transform() {
        let dataset: DatasetBase<_, ()> = array!["red", "green", "red", "blue"].into();
        let encoder = OrdinalEncoder::params()
            .reserve_empty(true)
            .fit(&dataset)
            .unwrap();
        assert_eq!(encoder.list(), vec!["", "red", "green", "blue"]);

        let codes = encoder.transform(&array!["blue", "violet", "red"]);
        assert_eq!(codes, array![3, 4, 1]);
        assert_eq!(encoder.decode(4), "violet");
    }

    #[test]
    fn test_ordinal_json() {
        let encoder = OrdinalEncoder::new(false);
        let value = "hello world";
        let code = encoder.encode(value);
        let data = encoder.to_json().unwrap();

        let restored = OrdinalEncoder::from_json(&data).unwrap();
        assert_eq!(restored.decode(code), value);
    }

    #[test]
    fn test_ordinal_csv() {
        let encoder = OrdinalEncoder::new(true);
        let value = "hello world";
        let code = encoder.encode(value);
        let data = encoder.to_csv().unwrap();

        let restored = OrdinalEncoder::from_csv(&data).unwrap();
        assert_eq!(restored.decode(code), value);
        assert_eq!(restored.decode(0), "");
        assert_eq!(restored, encoder);
    }

    #[test]
    fn test_ordinal_binary() {
        let encoder = OrdinalEncoder::new(false);
        let value = "hello world";
        let code = encoder.encode(value);
        let data = encoder.to_bytes().unwrap();

        let restored = OrdinalEncoder::from_bytes(&data).unwrap();
        assert_eq!(restored.decode(code), value);
        assert_eq!(restored.encode("next"), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_category_list() {
        let encoder = OrdinalEncoder::new(true);
        encoder.encode_batch(&["a", "b"]);

        let data = serde_json::to_string(&encoder).unwrap();
        assert_eq!(data, r#"["","a","b"]"#);
        let restored: OrdinalEncoder = serde_json::from_str(&data).unwrap();
        assert_eq!(restored, encoder);
        assert!(serde_json::from_str::<OrdinalEncoder>(r#"["a","a"]"#).is_err());
    }

    #[test]
    fn test_shared_between_threads() {
        let encoder = Arc::new(OrdinalEncoder::new(false));
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let encoder = Arc::clone(&encoder);
                thread::spawn(move || {
                    (0..100)
                        .map(|i| format!("category-{}", (i * (t + 1)) % 50))
                        .map(|v| (encoder.encode(&v), v))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            for (code, value) in handle.join().unwrap() {
                assert_eq!(encoder.decode(code), value);
            }
        }
        assert_eq!(encoder.len(), 50);
    }
}
