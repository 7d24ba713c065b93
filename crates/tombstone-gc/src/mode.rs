use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Policy governing when tombstones of a table become eligible for removal.
///
/// The discriminants are the values persisted by older schema encodings and
/// must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TombstoneGcMode {
    /// Tombstones expire once `gc_grace_seconds` has passed.
    Timeout = 0,
    /// Tombstones are never collected.
    Disabled = 1,
    /// Tombstones are collectable as soon as they are written.
    Immediate = 2,
    /// Tombstones are collectable once the covering range has been repaired.
    Repair = 3,
}

impl TombstoneGcMode {
    pub const ALL: [TombstoneGcMode; 4] = [
        TombstoneGcMode::Disabled,
        TombstoneGcMode::Repair,
        TombstoneGcMode::Timeout,
        TombstoneGcMode::Immediate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::Disabled => "disabled",
            Self::Immediate => "immediate",
            Self::Repair => "repair",
        }
    }

    pub fn from_repr(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Timeout),
            1 => Some(Self::Disabled),
            2 => Some(Self::Immediate),
            3 => Some(Self::Repair),
            _ => None,
        }
    }
}

/// Canonical name for a raw mode discriminant, `"unknown"` when it names no
/// variant.
pub fn mode_name(raw: u8) -> &'static str {
    TombstoneGcMode::from_repr(raw).map_or("unknown", TombstoneGcMode::as_str)
}

impl fmt::Display for TombstoneGcMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TombstoneGcMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "disabled" => Ok(Self::Disabled),
            "repair" => Ok(Self::Repair),
            "timeout" => Ok(Self::Timeout),
            "immediate" => Ok(Self::Immediate),
            _ => Err(Error::InvalidConfiguration(format!(
                "Invalid value for tombstone_gc option mode: {s}"
            ))),
        }
    }
}
