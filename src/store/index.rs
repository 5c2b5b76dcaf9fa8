use crate::store::error::StoreError;
use crate::types::index_key::{ContainerIndexKey, DateIndexKey};
use crate::types::{ContainerKey, RecordId};
use redb::{ReadTransaction, ReadableTable, TableDefinition, WriteTransaction};

/// By-container secondary index. Stores `ContainerIndexKey` entries; a
/// container's bucket is the key range sharing that container prefix.
pub(crate) struct ContainerIndex {
    definition: TableDefinition<'static, ContainerIndexKey, ()>,
}

impl ContainerIndex {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self {
            definition: TableDefinition::new(name),
        }
    }

    pub(crate) fn init(&self, txn: &WriteTransaction) -> Result<(), StoreError> {
        txn.open_table(self.definition)?;
        Ok(())
    }

    pub(crate) fn insert(
        &self,
        txn: &WriteTransaction,
        container: &ContainerKey,
        id: RecordId,
    ) -> Result<(), StoreError> {
        let mut table = txn.open_table(self.definition)?;
        table.insert(
            &ContainerIndexKey {
                container: container.clone(),
                id,
            },
            &(),
        )?;
        Ok(())
    }

    /// Returns `true` if the entry was present.
    pub(crate) fn remove(
        &self,
        txn: &WriteTransaction,
        container: &ContainerKey,
        id: RecordId,
    ) -> Result<bool, StoreError> {
        let mut table = txn.open_table(self.definition)?;
        Ok(table
            .remove(&ContainerIndexKey {
                container: container.clone(),
                id,
            })?
            .is_some())
    }

    /// All record ids in one container's bucket, ascending by id.
    pub(crate) fn ids(
        &self,
        txn: &ReadTransaction,
        container: &ContainerKey,
    ) -> Result<Vec<RecordId>, StoreError> {
        let table = txn.open_table(self.definition)?;
        let start = ContainerIndexKey {
            container: container.clone(),
            id: RecordId::MIN,
        };
        let end = ContainerIndexKey {
            container: container.clone(),
            id: RecordId::MAX,
        };

        table
            .range(start..=end)?
            .map(|entry| {
                let (key_guard, _) = entry?;
                Ok(key_guard.value().id)
            })
            .collect()
    }

    pub(crate) fn reset(&self, txn: &WriteTransaction) -> Result<(), StoreError> {
        txn.delete_table(self.definition)?;
        txn.open_table(self.definition)?;
        Ok(())
    }
}

/// By-date secondary index. Stores `DateIndexKey` entries keyed by
/// day-truncated archive timestamp.
pub(crate) struct DateIndex {
    definition: TableDefinition<'static, DateIndexKey, ()>,
}

impl DateIndex {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self {
            definition: TableDefinition::new(name),
        }
    }

    pub(crate) fn init(&self, txn: &WriteTransaction) -> Result<(), StoreError> {
        txn.open_table(self.definition)?;
        Ok(())
    }

    pub(crate) fn insert(
        &self,
        txn: &WriteTransaction,
        day: u64,
        id: RecordId,
    ) -> Result<(), StoreError> {
        let mut table = txn.open_table(self.definition)?;
        table.insert(&DateIndexKey { day, id }, &())?;
        Ok(())
    }

    /// Returns `true` if the entry was present.
    pub(crate) fn remove(
        &self,
        txn: &WriteTransaction,
        day: u64,
        id: RecordId,
    ) -> Result<bool, StoreError> {
        let mut table = txn.open_table(self.definition)?;
        Ok(table.remove(&DateIndexKey { day, id })?.is_some())
    }

    /// Union of all buckets with a day strictly before `cutoff_day`,
    /// oldest first.
    pub(crate) fn ids_before(
        &self,
        txn: &ReadTransaction,
        cutoff_day: u64,
    ) -> Result<Vec<RecordId>, StoreError> {
        let table = txn.open_table(self.definition)?;

        table
            .range(
                ..DateIndexKey {
                    day: cutoff_day,
                    id: RecordId::MIN,
                },
            )?
            .map(|entry| {
                let (key_guard, _) = entry?;
                Ok(key_guard.value().id)
            })
            .collect()
    }

    pub(crate) fn reset(&self, txn: &WriteTransaction) -> Result<(), StoreError> {
        txn.delete_table(self.definition)?;
        txn.open_table(self.definition)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
