//! Persisted device settings and their 2-byte flash record.
//!
//! Record layout: `[node_id: u8][reverse: u8 (0 or 1)]`.
//!
//! A stored node id of 0 (zeroed flash, torn write) is read back as 1.
//! Anything else out of range makes the whole record corrupt, and the
//! caller boots with [`Settings::DEFAULT`].

use crate::error::Error;

/// Size of the persisted settings record in bytes.
pub const RECORD_LEN: usize = 2;

/// Two-digit node identifier, always in `1..=99`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NodeId(u8);

impl NodeId {
    pub const MIN: NodeId = NodeId(1);
    pub const MAX: NodeId = NodeId(99);

    /// Returns `None` unless `raw` is in `1..=99`.
    pub const fn new(raw: u8) -> Option<Self> {
        if raw >= 1 && raw <= 99 {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Map a raw edit value onto a valid id: 0 becomes 1, values above
    /// 99 keep their last two digits.
    pub const fn normalize(raw: u8) -> Self {
        match raw % 100 {
            0 => Self::MIN,
            n => Self(n),
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn tens(self) -> u8 {
        self.0 / 10
    }

    pub const fn ones(self) -> u8 {
        self.0 % 10
    }
}

/// The persisted configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    pub node_id: NodeId,
    /// Inverts how the lock signal maps to the LOCK/UNLOCK label.
    pub reverse: bool,
}

impl Settings {
    /// Used when flash is blank, unreadable or corrupt.
    pub const DEFAULT: Settings = Settings {
        node_id: NodeId::MIN,
        reverse: false,
    };

    /// Encode into the on-flash record.
    pub fn to_record(&self) -> [u8; RECORD_LEN] {
        [self.node_id.get(), self.reverse as u8]
    }

    /// Decode an on-flash record.
    pub fn from_record(data: &[u8]) -> Result<Self, Error> {
        if data.len() != RECORD_LEN {
            return Err(Error::CorruptRecord);
        }

        let node_id = match data[0] {
            0 => NodeId::MIN,
            raw => NodeId::new(raw).ok_or(Error::CorruptRecord)?,
        };
        let reverse = match data[1] {
            0 => false,
            1 => true,
            _ => return Err(Error::CorruptRecord),
        };

        Ok(Self { node_id, reverse })
    }

    /// Boot-time soft-fail: whatever the storage layer reports, the
    /// device comes up with valid settings.
    pub fn or_default(loaded: Result<Option<Settings>, Error>) -> Settings {
        match loaded {
            Ok(Some(settings)) => settings,
            Ok(None) | Err(_) => Self::DEFAULT,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::DEFAULT
    }
}
