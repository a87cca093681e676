//! Serde shapes of the persisted graph
//!
//! ```json
//! {
//!   "cat": {
//!     "delete":  { "0": "at" },
//!     "insert":  { "3": { "s": "cats" } },
//!     "replace": { "0": { "b": "bat", "h": "hat" } }
//!   }
//! }
//! ```
//!
//! `delete` and `replace` are keyed by letter index, `insert` by gap index.
//! Empty maps are left out when encoding. Every map rejects repeated keys
//! when decoding.

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

/// Whole payload: word value → record
pub type WireGraph = BTreeMap<String, WireWord>;

/// Letter (or gap) index → (character → result word)
pub type OptionMap = BTreeMap<usize, BTreeMap<char, String>>;

/// Connections of one word
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WireWord {
    #[serde(
        default,
        skip_serializing_if = "BTreeMap::is_empty",
        deserialize_with = "unique_map"
    )]
    pub delete: BTreeMap<usize, String>,

    #[serde(
        default,
        skip_serializing_if = "BTreeMap::is_empty",
        deserialize_with = "unique_options"
    )]
    pub insert: OptionMap,

    #[serde(
        default,
        skip_serializing_if = "BTreeMap::is_empty",
        deserialize_with = "unique_options"
    )]
    pub replace: OptionMap,
}

/// Parse a whole payload, rejecting repeated word keys
///
/// # Errors
/// Returns a `serde_json::Error` for malformed JSON, a shape mismatch or a
/// key that appears twice in the same object.
pub fn parse(json: &str) -> Result<WireGraph, serde_json::Error> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let wire = unique_map(&mut deserializer)?;
    deserializer.end()?;
    Ok(wire)
}

/// Map that fails on a repeated key instead of keeping the last value
struct UniqueMap<K, V>(BTreeMap<K, V>);

impl<'de, K, V> Deserialize<'de> for UniqueMap<K, V>
where
    K: Deserialize<'de> + Ord + fmt::Display,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(UniqueMapVisitor(PhantomData))
    }
}

struct UniqueMapVisitor<K, V>(PhantomData<(K, V)>);

impl<'de, K, V> Visitor<'de> for UniqueMapVisitor<K, V>
where
    K: Deserialize<'de> + Ord + fmt::Display,
    V: Deserialize<'de>,
{
    type Value = UniqueMap<K, V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map without repeated keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = BTreeMap::new();
        while let Some(key) = access.next_key::<K>()? {
            if map.contains_key(&key) {
                return Err(de::Error::custom(format!("duplicate key '{key}'")));
            }
            let value = access.next_value()?;
            map.insert(key, value);
        }
        Ok(UniqueMap(map))
    }
}

fn unique_map<'de, D, K, V>(deserializer: D) -> Result<BTreeMap<K, V>, D::Error>
where
    D: Deserializer<'de>,
    K: Deserialize<'de> + Ord + fmt::Display,
    V: Deserialize<'de>,
{
    UniqueMap::deserialize(deserializer).map(|m| m.0)
}

fn unique_options<'de, D: Deserializer<'de>>(deserializer: D) -> Result<OptionMap, D::Error> {
    let outer: BTreeMap<usize, UniqueMap<char, String>> = unique_map(deserializer)?;
    Ok(outer.into_iter().map(|(i, options)| (i, options.0)).collect())
}
