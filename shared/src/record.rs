use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::rate_limit::MAX_SPINS_PER_DAY;

/// Stored `lastSpin` of a visitor who has never spun.
pub const NEVER_SPUN: i64 = 0;

/// A visitor's persisted session. Timestamps are Unix epoch milliseconds.
///
/// The JSON shape is camelCase so records written by earlier versions of the
/// browser client still load.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    /// `None` until the first spin. Stored as [`NEVER_SPUN`] on the wire.
    #[serde(serialize_with = "write_last_spin", deserialize_with = "read_last_spin")]
    pub last_spin: Option<i64>,
    pub spins_today: u32,
    pub shared_today: bool,
    pub registered_at: i64,
}

impl SessionRecord {
    pub fn new(name: impl Into<String>, email: impl Into<String>, now: i64) -> Self {
        Self {
            id: format!("user_{}", now),
            name: name.into(),
            email: email.into(),
            last_spin: None,
            spins_today: 0,
            shared_today: false,
            registered_at: now,
        }
    }

    pub fn has_spun(&self) -> bool {
        self.last_spin.is_some()
    }

    pub fn daily_limit_reached(&self) -> bool {
        self.spins_today >= MAX_SPINS_PER_DAY
    }

    pub fn with_spin(&self, now: i64) -> Self {
        Self {
            last_spin: Some(now),
            spins_today: (self.spins_today + 1).min(MAX_SPINS_PER_DAY),
            ..self.clone()
        }
    }

    pub fn with_share(&self) -> Self {
        Self {
            shared_today: true,
            ..self.clone()
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parses a stored record. Out-of-range counters are rejected so a
    /// tampered or half-written slot is treated like a corrupt one.
    ///
    /// A stored `lastSpin` of [`NEVER_SPUN`] only means "never spun" while no
    /// spin is counted; a spin taken at epoch zero keeps its timestamp.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut record: Self = serde_json::from_str(raw)?;
        if record.spins_today > MAX_SPINS_PER_DAY {
            return Err(serde::de::Error::custom(format!(
                "spinsToday out of range: {}",
                record.spins_today
            )));
        }
        if record.last_spin == Some(NEVER_SPUN) && record.spins_today == 0 {
            record.last_spin = None;
        }
        Ok(record)
    }
}

fn write_last_spin<S: Serializer>(last_spin: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i64(last_spin.unwrap_or(NEVER_SPUN))
}

fn read_last_spin<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Option::<i64>::deserialize(deserializer)
}
