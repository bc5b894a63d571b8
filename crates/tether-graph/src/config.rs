//! Graph arena configuration.

/// Configuration for an [`OwnedGraph`](crate::OwnedGraph) arena.
///
/// Plain data; the arena copies it at construction and never changes it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphConfig {
    /// Number of node slots reserved up front.
    ///
    /// Default: 16. The slot vector grows past this on demand.
    pub initial_capacity: usize,

    /// Upper bound on simultaneously live nodes.
    ///
    /// `None` (the default) means unbounded. Inserts beyond the limit fail
    /// with `GraphError::CapacityExceeded`; freed slots count against it
    /// only while occupied.
    pub max_nodes: Option<u32>,
}

impl GraphConfig {
    /// Default number of pre-reserved slots.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            max_nodes: None,
        }
    }

    /// Set the number of pre-reserved slots.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Bound the number of live nodes.
    pub fn with_max_nodes(mut self, max_nodes: u32) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded() {
        let config = GraphConfig::default();
        assert_eq!(config.initial_capacity, GraphConfig::DEFAULT_INITIAL_CAPACITY);
        assert_eq!(config.max_nodes, None);
    }

    #[test]
    fn builders_set_fields() {
        let config = GraphConfig::new()
            .with_initial_capacity(4)
            .with_max_nodes(100);
        assert_eq!(config.initial_capacity, 4);
        assert_eq!(config.max_nodes, Some(100));
    }
}
