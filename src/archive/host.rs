use crate::types::{Actor, ContainerKey, Payload};

/// Gateway to the live content hierarchy the archive serves.
///
/// The archive never touches live content directly: turning an item
/// into a dead snapshot, removing it from its container and placing a
/// restored item back are all host concerns. Host errors pass through
/// the archive untranslated.
pub trait ContentHost {
    /// Live content handle.
    type Item;

    type Error: std::error::Error;

    /// Identity of whoever is driving the current operation. Stored
    /// verbatim on the record.
    fn current_actor(&self) -> Actor;

    /// Turns a live item into a dead snapshot carrying no residual
    /// linkage into the content tree. Consumes the handle.
    fn strip(&mut self, item: Self::Item) -> Result<StrippedItem, Self::Error>;

    /// Physically removes the named item from its container.
    fn detach(&mut self, container: &ContainerKey, name: &str) -> Result<(), Self::Error>;

    /// Whether the container still resolves in the live hierarchy.
    fn container_exists(&self, container: &ContainerKey) -> bool;

    /// Whether `name` is already occupied within the container.
    fn name_taken(&self, container: &ContainerKey, name: &str) -> bool;

    /// Reinserts a payload into the container under `name`, returning
    /// the new live handle.
    fn place(
        &mut self,
        container: &ContainerKey,
        name: &str,
        payload: Payload,
    ) -> Result<Self::Item, Self::Error>;
}

/// Dead snapshot of a live item, as produced by [`ContentHost::strip`].
#[derive(Debug)]
pub struct StrippedItem {
    /// Short identifier the item held within its container.
    pub original_name: String,
    /// Display title at archive time. May be empty.
    pub title: String,
    /// Stable key of the container the item lived in.
    pub container: ContainerKey,
    pub payload: Payload,
}

/// Outcome of a successful restore.
#[derive(Debug)]
pub struct Restored<I> {
    /// The new live handle.
    pub item: I,
    /// Container the item was placed into.
    pub container: ContainerKey,
    /// Name the item ended up under. Differs from the original name
    /// only when that name was already taken.
    pub name: String,
}
