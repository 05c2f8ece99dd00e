//! Shared domain types: the operation tag and the status codes published
//! back to callers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One entry per row ever written to `history`. Numbering matches the
/// reference service so that replies remain wire-compatible with existing
/// callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i16)]
pub enum Operation {
    Credit = 1,
    Debit = 2,
    TransferSrc = 3,
    TransferDst = 4,
    Acquire = 5,
    Commit = 6,
    Rollback = 7,
}

impl Operation {
    #[inline]
    pub fn id(self) -> i16 {
        self as i16
    }

    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            1 => Some(Operation::Credit),
            2 => Some(Operation::Debit),
            3 => Some(Operation::TransferSrc),
            4 => Some(Operation::TransferDst),
            5 => Some(Operation::Acquire),
            6 => Some(Operation::Commit),
            7 => Some(Operation::Rollback),
            _ => None,
        }
    }
}

/// Status code carried in every response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Status {
    Ok = 0,
    UnknownError = 1,
    Deprecated = 2,
    NoMoney = 3,
    NotFound = 4,
}

impl Status {
    #[inline]
    pub fn id(self) -> u8 {
        self as u8
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.id())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = u8::deserialize(deserializer)?;
        match raw {
            0 => Ok(Status::Ok),
            1 => Ok(Status::UnknownError),
            2 => Ok(Status::Deprecated),
            3 => Ok(Status::NoMoney),
            4 => Ok(Status::NotFound),
            other => Err(serde::de::Error::custom(format!(
                "unknown status code: {other}"
            ))),
        }
    }
}

/// Account identifier. Externally supplied; the engine never creates or
/// deletes account rows.
pub type AccountId = u32;

/// Caller-supplied operation identifier; the unit of idempotency.
pub type Uid = i64;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(rename = "Status")]
    pub status: Status,
}

impl StatusResponse {
    pub fn new(status: Status) -> Self {
        Self { status }
    }
}
