use crate::errors::Result;

/// String key-value store the state container mirrors itself into.
///
/// The store is a passive mirror with no independent authority: the
/// in-memory value always wins and is re-serialized on every mutation.
/// Implementations must write synchronously; the container relies on a
/// completed `set_item` call meaning the value is durable.
pub trait LocalStoreTrait: Send + Sync {
    /// Returns the stored value for `key`, or `None` when absent.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key` if present. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}
