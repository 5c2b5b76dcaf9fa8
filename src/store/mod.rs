//! Archive store: the record table plus its two secondary indexes.
//!
//! Every mutating operation runs inside a single redb write
//! transaction, so the record table, the by-container index and the
//! by-date index can never drift apart. The store is single-writer:
//! callers serialize mutations per scope; `list` and `len` may run
//! concurrently with each other but not with a mutation.

use crate::store::alloc::IdAllocator;
use crate::store::index::{ContainerIndex, DateIndex};
use crate::types::index_key::day_ordinal;
use crate::types::record::VersionedRecord;
use crate::types::{Filter, Record, RecordDraft, RecordId, StoreTuning};
use error::StoreError;
use redb::{ReadTransaction, ReadableDatabase, ReadableTable, TableDefinition};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

pub mod error {
    use crate::types::RecordId;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum StoreError {
        #[error("Database error: {0}")]
        Redb(#[from] redb::DatabaseError),

        #[error("Table error: {0}")]
        Table(#[from] redb::TableError),

        #[error("Storage error: {0}")]
        Storage(#[from] redb::StorageError),

        #[error("Transaction error: {0}")]
        Transaction(#[from] redb::TransactionError),

        #[error("Commit error: {0}")]
        Commit(#[from] redb::CommitError),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("Record {0} not found")]
        NotFound(RecordId),

        #[error("Allocator produced duplicate id {0}")]
        DuplicateId(RecordId),
    }
}

pub(crate) mod alloc;
mod index;

/// Record table: RecordId → VersionedRecord.
const RECORDS: TableDefinition<'static, RecordId, VersionedRecord> = TableDefinition::new("records");

/// Secondary index over the records' original containers.
const BY_CONTAINER: ContainerIndex = ContainerIndex::new("by_container");

/// Secondary index over day-truncated archive timestamps.
const BY_DATE: DateIndex = DateIndex::new("by_date");

/// The indexed archive store for one scope.
pub struct ArchiveStore {
    db: redb::Database,
    alloc: IdAllocator,
    len: u64,
}

impl ArchiveStore {
    /// Creates or opens the archive database at `path`.
    pub fn open(path: &Path, tuning: &StoreTuning) -> Result<Self, StoreError> {
        let db = redb::Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(RECORDS)?;
            BY_CONTAINER.init(&write_txn)?;
            BY_DATE.init(&write_txn)?;
        }
        write_txn.commit()?;

        let len = {
            let read_txn = db.begin_read()?;
            let table = read_txn.open_table(RECORDS)?;
            let mut count = 0;
            for entry in table.iter()? {
                entry?;
                count += 1;
            }
            count
        };

        Ok(Self {
            db,
            alloc: IdAllocator::new(tuning.random_draw_interval),
            len,
        })
    }

    /// Inserts a draft, assigns it an id and returns the id.
    ///
    /// Candidate ids that collide with existing records are silently
    /// redrawn; `DuplicateId` can only surface if the allocator loop
    /// itself is broken.
    pub fn insert(&mut self, draft: RecordDraft) -> Result<RecordId, StoreError> {
        let write_txn = self.db.begin_write()?;
        let id;
        {
            let mut records = write_txn.open_table(RECORDS)?;

            let mut candidate = self.alloc.next();
            while records.get(&candidate)?.is_some() {
                candidate = self.alloc.redraw();
            }
            id = candidate;

            let record = Record::from_draft(id, draft);
            let container = record.container.clone();
            let day = day_ordinal(record.timestamp);

            if records.insert(&id, &VersionedRecord::V1(record))?.is_some() {
                return Err(StoreError::DuplicateId(id));
            }
            BY_CONTAINER.insert(&write_txn, &container, id)?;
            BY_DATE.insert(&write_txn, day, id)?;
        }
        write_txn.commit()?;

        self.len += 1;
        debug!(id = %id, "record inserted");
        Ok(id)
    }

    /// Removes a record and returns it, moving the payload to the
    /// caller. Fails with `NotFound` if the id is absent.
    pub fn remove(&mut self, id: RecordId) -> Result<Record, StoreError> {
        let write_txn = self.db.begin_write()?;
        let record;
        {
            let mut records = write_txn.open_table(RECORDS)?;
            record = records
                .remove(&id)?
                .map(|guard| guard.value().into_latest())
                .ok_or(StoreError::NotFound(id))?;

            BY_CONTAINER.remove(&write_txn, &record.container, id)?;
            BY_DATE.remove(&write_txn, day_ordinal(record.timestamp), id)?;
        }
        write_txn.commit()?;

        self.len -= 1;
        debug!(id = %id, "record removed");
        Ok(record)
    }

    /// Point lookup. Returns an owned copy, or `None` if the id is
    /// absent.
    pub fn get(&self, id: RecordId) -> Result<Option<Record>, StoreError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(RECORDS)?;
        Ok(table.get(&id)?.map(|guard| guard.value().into_latest()))
    }

    /// Lists matching records, most recently archived first.
    ///
    /// Results are owned copies; mutating them does not touch stored
    /// state. Equal timestamps keep gather order, which callers must
    /// not rely on. Never fails just because nothing matched.
    pub fn list(&self, filter: &Filter) -> Result<Vec<Record>, StoreError> {
        let read_txn = self.db.begin_read()?;
        let ids = Self::matching_ids(&read_txn, filter)?;

        let table = read_txn.open_table(RECORDS)?;
        let mut records = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(guard) = table.get(&id)? {
                records.push(guard.value().into_latest());
            }
        }

        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(records)
    }

    /// Removes matching records and returns how many were removed.
    ///
    /// A filter with no restriction resets the whole store in one step
    /// instead of visiting every record. Filtered clears snapshot the
    /// match set before touching the indexes it was read from.
    pub fn clear(&mut self, filter: &Filter) -> Result<u64, StoreError> {
        if filter.is_empty() {
            return self.reset();
        }

        let ids = {
            let read_txn = self.db.begin_read()?;
            Self::matching_ids(&read_txn, filter)?
        };

        let mut cleared = 0;
        let write_txn = self.db.begin_write()?;
        {
            let mut records = write_txn.open_table(RECORDS)?;
            for id in &ids {
                let Some(guard) = records.remove(id)? else {
                    continue;
                };
                let record = guard.value().into_latest();
                BY_CONTAINER.remove(&write_txn, &record.container, *id)?;
                BY_DATE.remove(&write_txn, day_ordinal(record.timestamp), *id)?;
                cleared += 1;
            }
        }
        write_txn.commit()?;

        self.len -= cleared;
        debug!(cleared, "records cleared by filter");
        Ok(cleared)
    }

    /// Number of live records. Maintained alongside every mutation and
    /// always equal to the record table's cardinality.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn matching_ids(txn: &ReadTransaction, filter: &Filter) -> Result<Vec<RecordId>, StoreError> {
        match (&filter.container, filter.before) {
            (Some(container), None) => BY_CONTAINER.ids(txn, container),
            (None, Some(before)) => BY_DATE.ids_before(txn, day_ordinal(before)),
            (Some(container), Some(before)) => {
                let dated: HashSet<RecordId> = BY_DATE
                    .ids_before(txn, day_ordinal(before))?
                    .into_iter()
                    .collect();
                let ids = BY_CONTAINER.ids(txn, container)?;
                Ok(ids.into_iter().filter(|id| dated.contains(id)).collect())
            }
            (None, None) => {
                let table = txn.open_table(RECORDS)?;
                let mut ids = Vec::new();
                for entry in table.iter()? {
                    let (key, _) = entry?;
                    ids.push(key.value());
                }
                Ok(ids)
            }
        }
    }

    /// Drops and recreates all three tables, returning the prior live
    /// count.
    fn reset(&mut self) -> Result<u64, StoreError> {
        let write_txn = self.db.begin_write()?;
        {
            write_txn.delete_table(RECORDS)?;
            let _ = write_txn.open_table(RECORDS)?;
            BY_CONTAINER.reset(&write_txn)?;
            BY_DATE.reset(&write_txn)?;
        }
        write_txn.commit()?;

        let cleared = self.len;
        self.len = 0;
        debug!(cleared, "store reset");
        Ok(cleared)
    }
}
