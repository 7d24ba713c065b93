use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::mode::TombstoneGcMode;

pub const MODE_KEY: &str = "mode";
pub const PROPAGATION_DELAY_KEY: &str = "propagation_delay_in_seconds";

pub const DEFAULT_MODE: TombstoneGcMode = TombstoneGcMode::Timeout;
pub const DEFAULT_PROPAGATION_DELAY: Duration = Duration::from_secs(3600);

/// Per-table `tombstone_gc` option, as stored in the table's schema
/// extensions.
///
/// Values are only produced fully validated: the delay always fits in a
/// signed 64-bit seconds count, so `to_map` output parses back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TombstoneGcOptions {
    mode: TombstoneGcMode,
    propagation_delay: Duration,
}

impl Default for TombstoneGcOptions {
    fn default() -> Self {
        Self {
            mode: DEFAULT_MODE,
            propagation_delay: DEFAULT_PROPAGATION_DELAY,
        }
    }
}

impl TombstoneGcOptions {
    pub fn new(mode: TombstoneGcMode, propagation_delay_in_seconds: u64) -> Result<Self> {
        if i64::try_from(propagation_delay_in_seconds).is_err() {
            return Err(invalid_delay(&propagation_delay_in_seconds.to_string()));
        }
        Ok(Self {
            mode,
            propagation_delay: Duration::from_secs(propagation_delay_in_seconds),
        })
    }

    /// Builds the options from the raw option map of a `tombstone_gc`
    /// property. Entries are checked in key order and the first rejected one
    /// fails the whole map; absent keys keep their defaults.
    pub fn from_map(options: &BTreeMap<String, String>) -> Result<Self> {
        let mut out = Self::default();
        for (key, value) in options {
            out.apply(key, value)?;
        }
        trace!(
            mode = %out.mode,
            delay_secs = out.propagation_delay.as_secs(),
            "parsed tombstone_gc options"
        );
        Ok(out)
    }

    /// Like [`Self::from_map`] for arbitrary pairs. A repeated key replaces
    /// the earlier value before validation.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map: BTreeMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::from_map(&map)
    }

    pub fn mode(&self) -> TombstoneGcMode {
        self.mode
    }

    pub fn propagation_delay(&self) -> Duration {
        self.propagation_delay
    }

    pub fn propagation_delay_in_seconds(&self) -> u64 {
        self.propagation_delay.as_secs()
    }

    pub fn to_map(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (MODE_KEY.to_string(), self.mode.as_str().to_string()),
            (
                PROPAGATION_DELAY_KEY.to_string(),
                self.propagation_delay.as_secs().to_string(),
            ),
        ])
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            MODE_KEY => {
                self.mode = value.parse::<TombstoneGcMode>().inspect_err(|_| {
                    debug!(
                        key,
                        value,
                        reason = "unknown mode",
                        "rejected tombstone_gc option"
                    );
                })?;
            }
            PROPAGATION_DELAY_KEY => {
                self.propagation_delay = parse_delay(value)?;
            }
            _ => {
                debug!(
                    key,
                    value,
                    reason = "unknown key",
                    "rejected tombstone_gc option"
                );
                return Err(Error::InvalidConfiguration(format!(
                    "Invalid tombstone_gc option: {key}"
                )));
            }
        }
        Ok(())
    }
}

fn parse_delay(value: &str) -> Result<Duration> {
    match value.parse::<i64>() {
        Ok(secs) if secs >= 0 => Ok(Duration::from_secs(secs as u64)),
        Ok(_) => {
            debug!(
                key = PROPAGATION_DELAY_KEY,
                value,
                reason = "negative",
                "rejected tombstone_gc option"
            );
            Err(invalid_delay(value))
        }
        Err(e) => {
            debug!(
                key = PROPAGATION_DELAY_KEY,
                value,
                reason = %e,
                "rejected tombstone_gc option"
            );
            Err(invalid_delay(value))
        }
    }
}

fn invalid_delay(value: &str) -> Error {
    Error::InvalidConfiguration(format!(
        "Invalid value for tombstone_gc option propagation_delay_in_seconds: {value}"
    ))
}

impl TryFrom<&BTreeMap<String, String>> for TombstoneGcOptions {
    type Error = Error;

    fn try_from(options: &BTreeMap<String, String>) -> Result<Self> {
        Self::from_map(options)
    }
}

impl TryFrom<&HashMap<String, String>> for TombstoneGcOptions {
    type Error = Error;

    fn try_from(options: &HashMap<String, String>) -> Result<Self> {
        let sorted: BTreeMap<String, String> = options
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Self::from_map(&sorted)
    }
}
