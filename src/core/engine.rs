use crate::core::aggregate::{self, GroupBy, GroupedTotal, KpiSummary, Measure};
use crate::core::feedback::{self, SentimentCounts};
use crate::core::sentiment::SentimentClassifier;
use crate::core::store::RecordStore;
use crate::domain::model::{FeedbackForm, FeedbackRecord, SaleForm, SalesRecord};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde::Serialize;

/// Everything one dashboard render needs: the KPI cards, the three chart
/// tables, the full normalized history tables, and the sentiment tally.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub kpis: KpiSummary,
    pub revenue_by_salesperson: Vec<GroupedTotal>,
    pub units_by_product: Vec<GroupedTotal>,
    pub revenue_by_date: Vec<GroupedTotal>,
    pub sales: Vec<SalesRecord>,
    pub feedback: Vec<FeedbackRecord>,
    pub sentiment: SentimentCounts,
}

/// Orchestrator for the load -> compute -> respond cycle. One user-facing
/// action maps to one call; no state survives between calls.
pub struct InsightEngine<S: Storage, C: ConfigProvider> {
    store: RecordStore<S, C>,
    classifier: SentimentClassifier,
}

impl<S: Storage, C: ConfigProvider> InsightEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            store: RecordStore::new(storage, config),
            classifier: SentimentClassifier::new(),
        }
    }

    pub fn store(&self) -> &RecordStore<S, C> {
        &self.store
    }

    /// Build the full dashboard from the current committed state.
    pub fn dashboard(&self) -> Result<DashboardReport> {
        tracing::info!("Loading sales records...");
        let sales = self.store.load_sales()?;
        tracing::info!("Loaded {} sales records", sales.len());

        tracing::info!("Loading feedback records...");
        let feedback_records = self.store.load_feedback()?;
        tracing::info!("Loaded {} feedback records", feedback_records.len());

        let report = DashboardReport {
            kpis: aggregate::kpis(&sales),
            revenue_by_salesperson: aggregate::group_sum(
                &sales,
                GroupBy::Salesperson,
                Measure::Amount,
            )?,
            units_by_product: aggregate::group_sum(&sales, GroupBy::Product, Measure::Quantity)?,
            revenue_by_date: aggregate::group_sum(&sales, GroupBy::Date, Measure::Amount)?,
            sentiment: feedback::sentiment_counts(&feedback_records),
            sales,
            feedback: feedback_records,
        };

        tracing::info!(
            "Dashboard computed: {} transactions, top seller {}",
            report.kpis.transactions,
            report.kpis.top_salesperson
        );
        Ok(report)
    }

    /// Validate and persist a new sale. The record is returned as stored.
    pub fn submit_sale(&self, form: SaleForm) -> Result<SalesRecord> {
        form.validate()?;

        let record = form.into_record();
        self.store.append_sale(&record)?;

        tracing::info!(
            "Recorded sale of {:?} by {:?}",
            record.product.as_deref().unwrap_or_default(),
            record.salesperson.as_deref().unwrap_or_default()
        );
        Ok(record)
    }

    /// Validate a feedback submission, derive its sentiment label, persist it.
    pub fn submit_feedback(&self, form: FeedbackForm) -> Result<FeedbackRecord> {
        form.validate()?;

        let sentiment = self.classifier.classify(&form.feedback_text);
        let record = form.into_record(sentiment);
        self.store.append_feedback(&record)?;

        tracing::info!(
            "Recorded {} feedback for {:?}",
            record.sentiment,
            record.product
        );
        Ok(record)
    }
}
