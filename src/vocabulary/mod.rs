//! Append-only vocabulary shared by the invertible encoders
//!
//! A [`Vocabulary`] assigns every distinct category the next unused integer code, in first-seen
//! order, and never reassigns or removes a code. Codes are always dense: after `n` distinct
//! categories the valid codes are exactly `[0, n)`.
//!
//! Categories are looked up by a 64-bit `ahash` digest computed with fixed seeds instead of by the
//! string itself. Two distinct strings with the same digest are not told apart: the later one
//! receives the code of the earlier one. This is a known limitation of the store.
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hasher};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use ahash::RandomState;

use crate::error::{Error, Result};

mod persist;

pub use persist::PersistVocabulary;

const KEY_SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

/// Digest used as lookup key for `value`
pub(crate) fn category_key(value: &str) -> u64 {
    let [k0, k1, k2, k3] = KEY_SEEDS;
    let mut hasher = RandomState::with_seeds(k0, k1, k2, k3).build_hasher();
    hasher.write(value.as_bytes());
    hasher.finish()
}

/// Key table and decode list, always updated together
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Table {
    pub(crate) keys: HashMap<u64, usize>,
    pub(crate) values: Vec<String>,
}

impl Table {
    fn insert(&mut self, value: &str) -> usize {
        let len = self.values.len();
        let code = *self.keys.entry(category_key(value)).or_insert(len);
        if code == len {
            self.values.push(value.to_string());
        }
        code
    }

    fn value(&self, code: usize) -> &str {
        self.values.get(code).map(String::as_str).unwrap_or("")
    }
}

/// Bidirectional, thread-safe mapping between categories and dense integer codes
///
/// Readers (`decode`, `contains`, `len`, `list`) share the lock; growth through `encode` excludes
/// every other operation, so two threads never hand out the same code to two new categories.
#[derive(Default)]
pub struct Vocabulary {
    table: RwLock<Table>,
}

impl Vocabulary {
    /// Create an empty vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a vocabulary with the empty string reserved as code `0`
    pub fn with_empty() -> Self {
        let vocabulary = Self::new();
        vocabulary.encode("");
        vocabulary
    }

    /// Build a vocabulary whose codes are the positions of `values`
    ///
    /// Fails with `Error::Format` if a category appears twice, as the second position could
    /// never be decoded consistently.
    pub fn from_values<I, T>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut table = Table::default();
        for (code, value) in values.into_iter().enumerate() {
            let value = value.into();
            if table.insert(&value) != code {
                return Err(Error::Format(format!(
                    "category {:?} at code {} is already encoded",
                    value, code
                )));
            }
        }

        Ok(Self::from_table(table))
    }

    pub(crate) fn from_table(table: Table) -> Self {
        Vocabulary {
            table: RwLock::new(table),
        }
    }

    /// Copy of the key table and decode list
    pub(crate) fn table(&self) -> Table {
        self.read().clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, Table> {
        // writers never leave the table half-updated, a poisoned lock holds consistent data
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Table> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the code of `value`, appending it to the vocabulary if it is new
    pub fn encode(&self, value: &str) -> usize {
        self.write().insert(value)
    }

    /// Like `encode`, also returning the vocabulary length right after the assignment
    pub fn encode_with_len(&self, value: &str) -> (usize, usize) {
        let mut table = self.write();
        let code = table.insert(value);
        (code, table.values.len())
    }

    /// Encode every value under a single write lock
    pub fn encode_batch<T: AsRef<str>>(&self, values: &[T]) -> Vec<usize> {
        let mut table = self.write();
        values.iter().map(|v| table.insert(v.as_ref())).collect()
    }

    /// Return the category of `code`, or the empty string if `code` lies outside `[0, len)`
    pub fn decode(&self, code: usize) -> String {
        self.read().value(code).to_string()
    }

    /// Decode every code, mapping unknown codes to the empty string
    pub fn decode_batch(&self, codes: &[usize]) -> Vec<String> {
        let table = self.read();
        codes.iter().map(|&c| table.value(c).to_string()).collect()
    }

    /// Whether `value` has been assigned a code
    pub fn contains(&self, value: &str) -> bool {
        self.read().keys.contains_key(&category_key(value))
    }

    /// Whether `code` lies in `[0, len)`
    pub fn contains_code(&self, code: usize) -> bool {
        code < self.len()
    }

    /// The code of `value` without assigning one
    pub fn code(&self, value: &str) -> Option<usize> {
        self.read().keys.get(&category_key(value)).copied()
    }

    pub fn len(&self) -> usize {
        self.read().values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all categories, the position of each entry is its code
    pub fn list(&self) -> Vec<String> {
        self.read().values.clone()
    }
}

impl Clone for Vocabulary {
    fn clone(&self) -> Self {
        Self::from_table(self.table())
    }
}

impl fmt::Debug for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vocabulary")
            .field("values", &self.read().values)
            .finish()
    }
}

impl PartialEq for Vocabulary {
    fn eq(&self, other: &Self) -> bool {
        self.list() == other.list()
    }
}

/// Serialized as the list of categories in code order
#[cfg(feature = "serde")]
impl serde_crate::Serialize for Vocabulary {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde_crate::Serializer,
    {
        serde_crate::Serialize::serialize(&self.read().values, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde_crate::Deserialize<'de> for Vocabulary {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde_crate::Deserializer<'de>,
    {
        let values = <Vec<String> as serde_crate::Deserialize>::deserialize(deserializer)?;
        Vocabulary::from_values(values).map_err(serde_crate::de::Error::custom)
    }
}
