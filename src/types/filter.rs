use crate::types::ContainerKey;
use std::time::SystemTime;

/// Restricts `list` and `clear` to matching records. The default filter
/// matches everything.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    pub container: Option<ContainerKey>,
    pub before: Option<SystemTime>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to records archived out of one container.
    pub fn container(mut self, container: ContainerKey) -> Self {
        self.container = Some(container);
        self
    }

    /// Restrict to records archived strictly before the given moment,
    /// compared at day granularity.
    pub fn before(mut self, before: SystemTime) -> Self {
        self.before = Some(before);
        self
    }

    /// True when no restriction is set.
    pub fn is_empty(&self) -> bool {
        self.container.is_none() && self.before.is_none()
    }
}
