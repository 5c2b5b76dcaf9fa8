use crate::types::{ContainerKey, RecordId};
use redb::TypeName;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Opaque identity of the actor that archived an item. Stored verbatim
/// and never interpreted by the archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor(pub Vec<u8>);

/// Dead snapshot of an archived item. The host guarantees it carries no
/// residual linkage into the live content tree; the archive never
/// inspects it. Ownership moves fully into the store on insert and
/// fully back to the caller on remove.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload(pub Vec<u8>);

/// A single archived entry. All indexed fields are immutable once the
/// record is inserted.
#[cfg_attr(test, derive(PartialEq, Eq))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    /// Original short identifier within the owning container.
    pub original_name: String,
    /// Display title captured at archive time. May be empty.
    pub title: String,
    /// Container the item was archived out of.
    pub container: ContainerKey,
    pub actor: Actor,
    /// Archival moment, UTC. Pre-epoch moments saturate to the epoch,
    /// matching the day truncation in the indexes.
    #[serde(with = "epoch_duration")]
    pub timestamp: SystemTime,
    pub payload: Payload,
}

/// Timestamp codec: duration since the Unix epoch, saturating
/// pre-epoch times to the epoch. Serde's own `SystemTime` impl rejects
/// pre-epoch times, which would turn a caller-supplied timestamp into
/// a panic mid-write.
mod epoch_duration {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::{Duration, SystemTime};

    pub(super) fn serialize<S: Serializer>(
        timestamp: &SystemTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        timestamp
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default()
            .serialize(serializer)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<SystemTime, D::Error> {
        let since_epoch = Duration::deserialize(deserializer)?;
        Ok(SystemTime::UNIX_EPOCH + since_epoch)
    }
}

impl Record {
    pub(crate) const VERSION: u8 = 1;

    pub(crate) fn from_draft(id: RecordId, draft: RecordDraft) -> Self {
        Self {
            id,
            original_name: draft.original_name,
            title: draft.title,
            container: draft.container,
            actor: draft.actor,
            timestamp: draft.timestamp,
            payload: draft.payload,
        }
    }
}

/// Fields of a record before the store has assigned it an id.
#[derive(Debug, Clone)]
pub struct RecordDraft {
    pub original_name: String,
    pub title: String,
    pub container: ContainerKey,
    pub actor: Actor,
    pub timestamp: SystemTime,
    pub payload: Payload,
}

/// Persistence envelope: a leading version byte followed by the
/// postcard encoding of the record.
#[derive(Debug, Clone)]
pub(crate) enum VersionedRecord {
    V1(Record),
}

impl VersionedRecord {
    pub(crate) fn into_latest(self) -> Record {
        match self {
            VersionedRecord::V1(record) => record,
        }
    }
}

impl redb::Value for VersionedRecord {
    type SelfType<'a> = VersionedRecord;
    type AsBytes<'a> = Vec<u8>;

    fn fixed_width() -> Option<usize> {
        None
    }

    fn from_bytes<'a>(data: &'a [u8]) -> Self::SelfType<'a>
    where
        Self: 'a,
    {
        let (version, data) = data.split_first().expect("empty record data");
        match *version {
            Record::VERSION => {
                let record = postcard::from_bytes::<Record>(data).expect("invalid record");
                VersionedRecord::V1(record)
            }
            version => panic!("unsupported record version: {}", version),
        }
    }

    fn as_bytes<'a, 'b: 'a>(value: &'a Self::SelfType<'b>) -> Self::AsBytes<'a>
    where
        Self: 'b,
    {
        match value {
            VersionedRecord::V1(record) => {
                postcard::to_extend(record, vec![Record::VERSION]).unwrap()
            }
        }
    }

    fn type_name() -> TypeName {
        TypeName::new("arca::Record")
    }
}
