//! String forms of [`TombstoneGcOptions`] used in schema metadata.
//!
//! The stored document is the compact JSON object of the canonical option
//! map, e.g. `{"mode":"repair","propagation_delay_in_seconds":"3600"}`.

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::options::TombstoneGcOptions;

impl TombstoneGcOptions {
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(&self.to_map())
            .map_err(|e| Error::Serialization(format!("tombstone_gc json: {e}")))
    }

    /// Parses a document produced by [`Self::to_json_string`]. The document
    /// must be an object of string values; the entries are then validated as
    /// by [`Self::from_map`].
    pub fn from_json_str(s: &str) -> Result<Self> {
        let map: BTreeMap<String, String> = serde_json::from_str(s)
            .map_err(|e| Error::Serialization(format!("tombstone_gc json: {e}")))?;
        Self::from_map(&map)
    }
}

impl fmt::Display for TombstoneGcOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let doc = self.to_json_string().map_err(|_| fmt::Error)?;
        f.write_str(&doc)
    }
}

impl FromStr for TombstoneGcOptions {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json_str(s)
    }
}

impl Serialize for TombstoneGcOptions {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_map().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TombstoneGcOptions {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OptionsVisitor;
        impl<'de> Visitor<'de> for OptionsVisitor {
            type Value = TombstoneGcOptions;
            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a map of tombstone_gc option names to string values")
            }
            fn visit_map<A>(self, mut access: A) -> core::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut options = BTreeMap::new();
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    options.insert(key, value);
                }
                TombstoneGcOptions::from_map(&options).map_err(de::Error::custom)
            }
        }
        deserializer.deserialize_map(OptionsVisitor)
    }
}
