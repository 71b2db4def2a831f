//! Export and import of vocabularies
//!
//! Every invertible encoder persists the same thing: the ordered list of its categories, the
//! position of a category being its code. [`PersistVocabulary`] implements the three supported
//! formats once on top of two accessor methods.
use std::collections::{BTreeMap, HashMap};

use csv::{ErrorKind, ReaderBuilder, Writer};
use log::{debug, warn};

use super::{Table, Vocabulary};
use crate::error::{Error, Result};

const CSV_HEADER: [&str; 2] = ["value", "code"];

/// Round-trip an encoder's vocabulary through JSON, CSV or an opaque binary encoding
///
/// * JSON: an array of categories, position = code
/// * CSV: a `value,code` header followed by one row per category. Rows with a wrong number of
/// fields or invalid UTF-8 are skipped, a code which is not an integer aborts the import.
/// * binary: the key table and the category list as written by `bincode`
///
/// All imports fail with `Error::Format` if the resulting codes do not cover `[0, len)` exactly
/// once.
pub trait PersistVocabulary: Sized {
    fn vocabulary(&self) -> &Vocabulary;

    fn from_vocabulary(vocabulary: Vocabulary) -> Self;

    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.vocabulary().list())?)
    }

    fn from_json(data: &str) -> Result<Self> {
        let values: Vec<String> = serde_json::from_str(data)?;
        debug!("importing {} categories from JSON", values.len());

        Ok(Self::from_vocabulary(Vocabulary::from_values(values)?))
    }

    fn to_csv(&self) -> Result<Vec<u8>> {
        let mut writer = Writer::from_writer(Vec::new());
        writer.write_record(CSV_HEADER)?;
        for (code, value) in self.vocabulary().list().iter().enumerate() {
            writer.write_record([value.as_str(), code.to_string().as_str()])?;
        }

        writer
            .into_inner()
            .map_err(|err| Error::Csv(err.into_error().into()))
    }

    fn from_csv(data: &[u8]) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(data);

        let headers = reader.headers()?;
        if headers.len() != CSV_HEADER.len() || headers.iter().zip(CSV_HEADER).any(|(a, b)| a != b)
        {
            return Err(Error::Format(format!(
                "expected header `value,code`, found {:?}",
                headers
            )));
        }

        let mut rows = BTreeMap::new();
        for (line, record) in reader.records().enumerate() {
            let record = match record {
                Ok(record) => record,
                Err(err) if matches!(err.kind(), ErrorKind::Utf8 { .. }) => {
                    warn!("skipping row {}: {}", line + 1, err);
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            if record.len() != CSV_HEADER.len() {
                warn!(
                    "skipping row {}: expected 2 fields, found {}",
                    line + 1,
                    record.len()
                );
                continue;
            }

            let code: usize = record[1].trim().parse().map_err(|_| {
                Error::Format(format!(
                    "row {}: code {:?} is not a non-negative integer",
                    line + 1,
                    &record[1]
                ))
            })?;

            if rows.insert(code, record[0].to_string()).is_some() {
                return Err(Error::Format(format!(
                    "row {}: code {} appears more than once",
                    line + 1,
                    code
                )));
            }
        }

        // codes have to be exactly `0..len` once sorted
        if let Some((position, code)) = rows.keys().enumerate().find(|(pos, code)| pos != *code) {
            return Err(Error::Format(format!(
                "code {} is out of range, expected {}",
                code, position
            )));
        }
        debug!("importing {} categories from CSV", rows.len());

        Ok(Self::from_vocabulary(Vocabulary::from_values(
            rows.into_values(),
        )?))
    }

    fn to_bytes(&self) -> Result<Vec<u8>> {
        let Table { keys, values } = self.vocabulary().table();
        Ok(bincode::serialize(&(keys, values))?)
    }

    fn from_bytes(data: &[u8]) -> Result<Self> {
        let (keys, values): (HashMap<u64, usize>, Vec<String>) = bincode::deserialize(data)?;
        if keys.len() != values.len() {
            return Err(Error::Format(format!(
                "{} keys for {} categories",
                keys.len(),
                values.len()
            )));
        }
        if let Some(code) = keys.values().find(|&&code| code >= values.len()) {
            return Err(Error::Format(format!(
                "code {} is out of range for {} categories",
                code,
                values.len()
            )));
        }
        debug!("importing {} categories from binary", values.len());

        let vocabulary = Vocabulary::from_values(values)?;
        if vocabulary.read().keys != keys {
            warn!("stored key table does not match category digests, rebuilt from the categories");
        }

        Ok(Self::from_vocabulary(vocabulary))
    }
}

impl PersistVocabulary for Vocabulary {
    fn vocabulary(&self) -> &Vocabulary {
        self
    }

    fn from_vocabulary(vocabulary: Vocabulary) -> Self {
        vocabulary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruits() -> Vocabulary {
        let vocabulary = Vocabulary::with_empty();
        vocabulary.encode_batch(&["apple", "pear", "hello world", "kiwi, sliced"]);
        vocabulary
    }

    fn assert_same_codes(original: &Vocabulary, restored: &Vocabulary) {
        assert_eq!(original.len(), restored.len());
        for code in 0..original.len() {
            assert_eq!(original.decode(code), restored.decode(code));
            assert_eq!(restored.encode(&original.decode(code)), code);
        }
    }

    #[test]
    fn json_round_trip() {
        let vocabulary = fruits();
        let data = vocabulary.to_json().unwrap();
        assert_eq!(data, r#"["","apple","pear","hello world","kiwi, sliced"]"#);

        let restored = Vocabulary::from_json(&data).unwrap();
        assert_same_codes(&vocabulary, &restored);
    }

    #[test]
    fn json_rejects_repeated_category() {
        let res = Vocabulary::from_json(r#"["a","b","a"]"#);
        assert!(matches!(res, Err(Error::Format(_))));

        let res = Vocabulary::from_json(r#"{"a": 0}"#);
        assert!(matches!(res, Err(Error::Json(_))));
    }

    #[test]
    fn csv_round_trip() {
        let vocabulary = fruits();
        let data = vocabulary.to_csv().unwrap();
        let text = String::from_utf8(data.clone()).unwrap();
        assert!(text.starts_with("value,code\n"));
        assert!(text.contains("\"kiwi, sliced\",4\n"));

        let restored = Vocabulary::from_csv(&data).unwrap();
        assert_same_codes(&vocabulary, &restored);
    }

    #[test]
    fn csv_accepts_unordered_rows_and_skips_malformed() {
        let data = b"value,code\nworld,1\nbroken\nhello,0\ntoo,many,fields\n";
        let restored = Vocabulary::from_csv(&data[..]).unwrap();
        assert_eq!(restored.list(), vec!["hello", "world"]);
    }

    #[test]
    fn csv_surfaces_unrecoverable_rows() {
        let data = b"value,code\nhello,zero\n";
        assert!(matches!(
            Vocabulary::from_csv(&data[..]),
            Err(Error::Format(_))
        ));

        let data = b"value,code\nhello,0\nworld,2\n";
        assert!(matches!(
            Vocabulary::from_csv(&data[..]),
            Err(Error::Format(_))
        ));

        let data = b"value,code\nhello,0\nworld,0\n";
        assert!(matches!(
            Vocabulary::from_csv(&data[..]),
            Err(Error::Format(_))
        ));
    }

    #[test]
    fn csv_requires_header() {
        assert!(matches!(Vocabulary::from_csv(b""), Err(Error::Format(_))));

        let data = b"hello,0\nworld,1\n";
        assert!(matches!(
            Vocabulary::from_csv(&data[..]),
            Err(Error::Format(_))
        ));
    }

    #[test]
    fn binary_round_trip() {
        let vocabulary = fruits();
        let data = vocabulary.to_bytes().unwrap();

        let restored = Vocabulary::from_bytes(&data).unwrap();
        assert_same_codes(&vocabulary, &restored);
        assert_eq!(vocabulary.table(), restored.table());
    }

    #[test]
    fn binary_rejects_out_of_range_codes() {
        let mut keys = HashMap::new();
        keys.insert(1u64, 0usize);
        keys.insert(2u64, 2usize);
        let values = vec!["a".to_string(), "b".to_string()];
        let data = bincode::serialize(&(keys, values)).unwrap();
        assert!(matches!(
            Vocabulary::from_bytes(&data),
            Err(Error::Format(_))
        ));

        assert!(matches!(
            Vocabulary::from_bytes(&[1, 2, 3]),
            Err(Error::Bincode(_))
        ));
    }
}
