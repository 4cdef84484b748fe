use crate::core::normalize;
use crate::domain::model::{FeedbackRecord, SalesRecord};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::Result;

/// Owner of the on-disk tables. Nothing is cached between calls: every load
/// re-reads the file and every append rewrites the whole table through the
/// storage backend's atomic replace, so a reader always sees the latest
/// committed state.
pub struct RecordStore<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> RecordStore<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn load_sales(&self) -> Result<Vec<SalesRecord>> {
        match self.storage.read_file(self.config.sales_table())? {
            Some(bytes) => normalize::sales_from_csv(&bytes),
            None => {
                tracing::debug!(
                    "sales table {} absent, treating as empty",
                    self.config.sales_table()
                );
                Ok(Vec::new())
            }
        }
    }

    pub fn append_sale(&self, record: &SalesRecord) -> Result<()> {
        let mut records = self.load_sales()?;
        records.push(record.clone());

        let bytes = normalize::sales_to_csv(&records)?;
        self.storage.write_file(self.config.sales_table(), &bytes)?;

        tracing::debug!(
            "sales table {} rewritten with {} records",
            self.config.sales_table(),
            records.len()
        );
        Ok(())
    }

    pub fn load_feedback(&self) -> Result<Vec<FeedbackRecord>> {
        match self.storage.read_file(self.config.feedback_table())? {
            Some(bytes) => normalize::feedback_from_csv(&bytes),
            None => {
                tracing::debug!(
                    "feedback table {} absent, treating as empty",
                    self.config.feedback_table()
                );
                Ok(Vec::new())
            }
        }
    }

    pub fn append_feedback(&self, record: &FeedbackRecord) -> Result<()> {
        let mut records = self.load_feedback()?;
        records.push(record.clone());

        let bytes = normalize::feedback_to_csv(&records)?;
        self.storage
            .write_file(self.config.feedback_table(), &bytes)?;

        tracing::debug!(
            "feedback table {} rewritten with {} records",
            self.config.feedback_table(),
            records.len()
        );
        Ok(())
    }
}
