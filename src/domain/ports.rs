use crate::utils::error::Result;

/// Flat-file backend behind the record store. Every user-facing action is one
/// bounded, synchronous load/compute/respond cycle.
pub trait Storage: Send + Sync {
    /// Returns `None` when the file does not exist; a missing table is an
    /// empty table, not an error.
    fn read_file(&self, path: &str) -> Result<Option<Vec<u8>>>;

    /// Replaces the file contents in one step (temp write + rename). A crash
    /// mid-write must never leave a half-written table.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn data_dir(&self) -> &str;
    fn sales_table(&self) -> &str;
    fn feedback_table(&self) -> &str;
}
