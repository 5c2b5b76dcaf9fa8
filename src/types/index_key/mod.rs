use crate::types::{ContainerKey, RecordId};
use redb::TypeName;
use std::cmp::Ordering;
use std::time::SystemTime;

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Truncates a timestamp to whole days since the Unix epoch. Pre-epoch
/// times saturate to day zero.
pub(crate) fn day_ordinal(timestamp: SystemTime) -> u64 {
    timestamp
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs() / SECS_PER_DAY)
        .unwrap_or(0)
}

/// Entry in the by-container index. A container's bucket is the
/// contiguous key range sharing its prefix, so an empty bucket has no
/// representation at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ContainerIndexKey {
    pub container: ContainerKey,
    pub id: RecordId,
}

/// The id is fixed-width at the end; the container takes the rest.
fn split_container(data: &[u8]) -> (&[u8], &[u8]) {
    data.split_at(data.len() - 4)
}

impl redb::Key for ContainerIndexKey {
    fn compare(data1: &[u8], data2: &[u8]) -> Ordering {
        let (container1, id1) = split_container(data1);
        let (container2, id2) = split_container(data2);

        <ContainerKey as redb::Key>::compare(container1, container2)
            .then_with(|| <RecordId as redb::Key>::compare(id1, id2))
    }
}

impl redb::Value for ContainerIndexKey {
    type SelfType<'a> = ContainerIndexKey;
    type AsBytes<'a> = Vec<u8>;

    fn fixed_width() -> Option<usize> {
        None
    }

    fn from_bytes<'a>(data: &'a [u8]) -> Self::SelfType<'a>
    where
        Self: 'a,
    {
        let (container, id) = split_container(data);

        ContainerIndexKey {
            container: <ContainerKey as redb::Value>::from_bytes(container),
            id: <RecordId as redb::Value>::from_bytes(id),
        }
    }

    fn as_bytes<'a, 'b: 'a>(value: &'a Self::SelfType<'b>) -> Self::AsBytes<'a>
    where
        Self: 'b,
    {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(<ContainerKey as redb::Value>::as_bytes(&value.container));
        bytes.extend_from_slice(&<RecordId as redb::Value>::as_bytes(&value.id));
        bytes
    }

    fn type_name() -> TypeName {
        TypeName::new("arca::ContainerIndexKey")
    }
}

/// Entry in the by-date index, keyed by day-truncated archive timestamp
/// followed by record id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DateIndexKey {
    pub day: u64,
    pub id: RecordId,
}

fn split_day(data: &[u8]) -> (u64, &[u8]) {
    let (day, id) = data.split_first_chunk::<8>().expect("date index key too short");
    (u64::from_be_bytes(*day), id)
}

impl redb::Key for DateIndexKey {
    fn compare(data1: &[u8], data2: &[u8]) -> Ordering {
        let (day1, id1) = split_day(data1);
        let (day2, id2) = split_day(data2);

        day1.cmp(&day2)
            .then_with(|| <RecordId as redb::Key>::compare(id1, id2))
    }
}

impl redb::Value for DateIndexKey {
    type SelfType<'a> = DateIndexKey;
    type AsBytes<'a> = Vec<u8>;

    fn fixed_width() -> Option<usize> {
        Some(12)
    }

    fn from_bytes<'a>(data: &'a [u8]) -> Self::SelfType<'a>
    where
        Self: 'a,
    {
        let (day, id) = split_day(data);

        DateIndexKey {
            day,
            id: <RecordId as redb::Value>::from_bytes(id),
        }
    }

    fn as_bytes<'a, 'b: 'a>(value: &'a Self::SelfType<'b>) -> Self::AsBytes<'a>
    where
        Self: 'b,
    {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&value.day.to_be_bytes());
        bytes.extend_from_slice(&<RecordId as redb::Value>::as_bytes(&value.id));
        bytes
    }

    fn type_name() -> TypeName {
        TypeName::new("arca::DateIndexKey")
    }
}
