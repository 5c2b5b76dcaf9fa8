//! Archive service: the host-facing façade over the store.

use crate::store::ArchiveStore;
use crate::store::error::StoreError;
use crate::types::{ContainerKey, Filter, Record, RecordDraft, RecordId, StoreTuning};
use error::ArchiveError;
use std::path::Path;
use std::time::SystemTime;
use tracing::warn;

mod host;
mod registry;

pub use host::{ContentHost, Restored, StrippedItem};
pub use registry::ArchiveRegistry;

pub mod error {
    use crate::store::error::StoreError;
    use crate::types::ContainerKey;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum ArchiveError<E: std::error::Error> {
        #[error(transparent)]
        Store(#[from] StoreError),

        #[error("Container {0} no longer exists")]
        ParentGone(ContainerKey),

        #[error("Host error: {0}")]
        Host(E),
    }
}

/// The archive for one scope. Owns the scope's store; all content-tree
/// interaction goes through a [`ContentHost`] supplied per call.
pub struct ContentArchive {
    store: ArchiveStore,
}

impl ContentArchive {
    /// Creates or opens the archive database at `path`.
    pub fn open(path: &Path, tuning: &StoreTuning) -> Result<Self, StoreError> {
        Ok(Self {
            store: ArchiveStore::open(path, tuning)?,
        })
    }
}

/// Archive and restore.
impl ContentArchive {
    /// Archives a live item: strips it to a dead snapshot, records it
    /// under a fresh id stamped with the host's current actor and
    /// `now`, then detaches the original from its container.
    ///
    /// If the detach fails the freshly inserted record is removed
    /// again, so the observable state moves all-or-nothing.
    pub fn archive<H: ContentHost>(
        &mut self,
        host: &mut H,
        item: H::Item,
        now: SystemTime,
    ) -> Result<RecordId, ArchiveError<H::Error>> {
        let stripped = host.strip(item).map_err(ArchiveError::Host)?;

        let draft = RecordDraft {
            original_name: stripped.original_name,
            title: stripped.title,
            container: stripped.container,
            actor: host.current_actor(),
            timestamp: now,
            payload: stripped.payload,
        };
        let container = draft.container.clone();
        let original_name = draft.original_name.clone();

        let id = self.store.insert(draft)?;

        if let Err(detach_err) = host.detach(&container, &original_name) {
            if let Err(rollback_err) = self.store.remove(id) {
                warn!(id = %id, error = %rollback_err, "rollback after failed detach failed");
            }
            return Err(ArchiveError::Host(detach_err));
        }

        Ok(id)
    }

    /// Restores an archived record into the live hierarchy.
    ///
    /// The record is consumed up front, so a restore happens at most
    /// once per id even when a later step fails. If the original
    /// container no longer resolves the restore fails with
    /// `ParentGone` and the record stays gone. The item is placed
    /// under its original name when free, otherwise under the first
    /// free `name-1`, `name-2`, ... variant.
    pub fn restore<H: ContentHost>(
        &mut self,
        host: &mut H,
        id: RecordId,
    ) -> Result<Restored<H::Item>, ArchiveError<H::Error>> {
        let record = self.store.remove(id)?;

        if !host.container_exists(&record.container) {
            warn!(id = %id, container = %record.container, "restore target container is gone");
            return Err(ArchiveError::ParentGone(record.container));
        }

        let name = free_name(host, &record.container, &record.original_name);
        let item = host
            .place(&record.container, &name, record.payload)
            .map_err(ArchiveError::Host)?;

        Ok(Restored {
            item,
            container: record.container,
            name,
        })
    }
}

/// Store delegation.
impl ContentArchive {
    pub fn get(&self, id: RecordId) -> Result<Option<Record>, StoreError> {
        self.store.get(id)
    }

    pub fn list(&self, filter: &Filter) -> Result<Vec<Record>, StoreError> {
        self.store.list(filter)
    }

    pub fn clear(&mut self, filter: &Filter) -> Result<u64, StoreError> {
        self.store.clear(filter)
    }

    pub fn len(&self) -> u64 {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

/// First free name in the container: the original name itself, then
/// numbered variants.
fn free_name<H: ContentHost>(host: &H, container: &ContainerKey, original: &str) -> String {
    if !host.name_taken(container, original) {
        return original.to_string();
    }

    let mut n = 1u32;
    loop {
        let candidate = format!("{original}-{n}");
        if !host.name_taken(container, &candidate) {
            return candidate;
        }
        n += 1;
    }
}
