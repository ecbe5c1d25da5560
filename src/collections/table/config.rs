use derive_more::IsVariant;

/// The capacity used by [`TableConfig::default`].
pub const DEFAULT_CAPACITY: usize = 80_000;

/// How a table treats an insert whose key is already present.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum DuplicatePolicy {
    /// The existing entry is replaced in place and the table doesn't grow. At most one entry
    /// exists per key.
    #[default]
    Overwrite,
    /// Every insert adds an entry. Lookups find the most recently inserted match and removals
    /// delete every match.
    Append,
}

/// Construction-time settings for a table. Neither setting can change once a table exists.
///
/// # Examples
/// ```
/// # use tablekit::collections::table::{DuplicatePolicy, TableConfig};
/// let config = TableConfig::new()
///     .with_capacity(16)
///     .with_policy(DuplicatePolicy::Append);
///
/// assert_eq!(config.capacity, 16);
/// assert!(config.policy.is_append());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableConfig {
    /// The maximum number of entries in an array-backed table. List-backed tables are unbounded
    /// and ignore this.
    pub capacity: usize,
    pub policy: DuplicatePolicy,
}

impl TableConfig {
    pub const fn new() -> TableConfig {
        TableConfig {
            capacity: DEFAULT_CAPACITY,
            policy: DuplicatePolicy::Overwrite,
        }
    }

    pub const fn with_capacity(mut self, capacity: usize) -> TableConfig {
        self.capacity = capacity;
        self
    }

    pub const fn with_policy(mut self, policy: DuplicatePolicy) -> TableConfig {
        self.policy = policy;
        self
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig::new()
    }
}
