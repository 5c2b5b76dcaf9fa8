use redb::TypeName;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Identifier of an archived record, assigned by the store at insert
/// time. Drawn from the full signed 32-bit space; never chosen by the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(i32);

impl RecordId {
    pub const MIN: RecordId = RecordId(i32::MIN);
    pub const MAX: RecordId = RecordId(i32::MAX);

    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn decode(data: &[u8]) -> i32 {
    i32::from_be_bytes(data.try_into().expect("record id must be 4 bytes"))
}

impl redb::Key for RecordId {
    fn compare(data1: &[u8], data2: &[u8]) -> Ordering {
        decode(data1).cmp(&decode(data2))
    }
}

impl redb::Value for RecordId {
    type SelfType<'a> = Self;
    type AsBytes<'a> = [u8; 4];

    fn fixed_width() -> Option<usize> {
        Some(4)
    }

    fn from_bytes<'a>(data: &'a [u8]) -> Self::SelfType<'a>
    where
        Self: 'a,
    {
        Self(decode(data))
    }

    fn as_bytes<'a, 'b: 'a>(value: &'a Self::SelfType<'b>) -> Self::AsBytes<'a>
    where
        Self: 'b,
    {
        value.0.to_be_bytes()
    }

    fn type_name() -> TypeName {
        TypeName::new("arca::RecordId")
    }
}

#[cfg(test)]
mod tests;
