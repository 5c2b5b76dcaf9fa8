pub mod archive;
pub mod store;
pub mod types;

pub use archive::error::ArchiveError;
pub use archive::{ArchiveRegistry, ContentArchive, ContentHost, Restored, StrippedItem};
pub use store::ArchiveStore;
pub use store::error::StoreError;
pub use types::{
    Actor, Config, ContainerKey, Filter, Payload, Record, RecordDraft, RecordId, ScopeId,
    StoreTuning,
};
