use crate::domain::model::{FeedbackRecord, Sentiment};
use serde::Serialize;

/// Sentiment tally for the feedback chart. Both labels are always present,
/// zero counts included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
}

impl SentimentCounts {
    pub fn rows(&self) -> [(Sentiment, usize); 2] {
        [
            (Sentiment::Positive, self.positive),
            (Sentiment::Negative, self.negative),
        ]
    }
}

pub fn sentiment_counts(records: &[FeedbackRecord]) -> SentimentCounts {
    let positive = records
        .iter()
        .filter(|r| r.sentiment == Sentiment::Positive)
        .count();

    SentimentCounts {
        positive,
        negative: records.len() - positive,
    }
}
