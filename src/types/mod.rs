pub(crate) mod config;
pub use config::{Config, ConfigError, StoreTuning};

pub(crate) mod container_key;
pub use container_key::{ContainerKey, ContainerKeyError, MAX_CONTAINER_KEY_LENGTH};

pub(crate) mod filter;
pub use filter::Filter;

pub(crate) mod index_key;

pub(crate) mod record;
pub use record::{Actor, Payload, Record, RecordDraft};

pub(crate) mod record_id;
pub use record_id::RecordId;

pub(crate) mod scope_id;
pub use scope_id::{MAX_SCOPE_ID_LENGTH, ScopeId, ScopeIdError};
