use crate::archive::ContentArchive;
use crate::store::error::StoreError;
use crate::types::{Config, ScopeId};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::debug;

/// Lazily opens and caches one [`ContentArchive`] per scope.
///
/// Scopes never share records: each scope's archive lives in its own
/// database under `base_path/<scope>/`. The store itself is
/// scope-unaware; this registry is the only place scopes exist.
pub struct ArchiveRegistry {
    config: Config,
    scopes: HashMap<ScopeId, ContentArchive>,
}

impl ArchiveRegistry {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            scopes: HashMap::new(),
        }
    }

    /// The archive for the given scope, opened on first use. Repeated
    /// calls with the same scope return the same instance.
    pub fn get_or_open(&mut self, scope: &ScopeId) -> Result<&mut ContentArchive, StoreError> {
        match self.scopes.entry(scope.clone()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let path = self.config.scope_db_path(scope);
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }

                let archive = ContentArchive::open(&path, &self.config.tuning)?;
                debug!(scope = %scope, path = %path.display(), "opened scope archive");
                Ok(entry.insert(archive))
            }
        }
    }
}
