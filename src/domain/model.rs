use crate::utils::error::{EngineError, Result};
use crate::utils::validation::{
    validate_email, validate_non_empty_string, validate_non_negative, validate_range, Validate,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Timestamp layouts accepted across old and new table files. The submission
/// flow writes the first layout; the admin table historically carried bare dates.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %I:%M %p",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

/// Parse the calendar date out of a raw timestamp cell.
pub fn parse_calendar_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();

    for format in TIMESTAMP_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt.date());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(d);
        }
    }

    Err(EngineError::DateParseError {
        value: value.to_string(),
    })
}

/// Canonical sales record. Every field is optional after normalization so
/// tables written before a column existed still load; new submissions always
/// carry the full set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub timestamp: Option<String>,
    pub salesperson: Option<String>,
    pub product: Option<String>,
    pub quantity: Option<i64>,
    pub amount: Option<f64>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
}

impl SalesRecord {
    /// Calendar date of the transaction. Only the date-grouping path calls
    /// this; a missing or unparsable timestamp is a hard error there.
    pub fn calendar_date(&self) -> Result<NaiveDate> {
        match &self.timestamp {
            Some(raw) => parse_calendar_date(raw),
            None => Err(EngineError::DateParseError {
                value: String::new(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    /// Stored labels are `Positive` / `Negative`. Anything else collapses to
    /// Negative, matching the binary classification.
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("positive") {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Negative => write!(f, "Negative"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub customer_name: String,
    pub product: String,
    pub rating: Option<i64>,
    pub feedback_text: String,
    pub sentiment: Sentiment,
}

/// Raw form fields for a new sale, exactly as the presentation layer hands
/// them over. Validation happens here, before anything reaches the store.
#[derive(Debug, Clone)]
pub struct SaleForm {
    pub timestamp: String,
    pub salesperson: String,
    pub customer_name: String,
    pub customer_email: String,
    pub product: String,
    pub quantity: i64,
    pub amount: f64,
}

impl Validate for SaleForm {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("timestamp", &self.timestamp)?;
        validate_non_empty_string("salesperson", &self.salesperson)?;
        validate_non_empty_string("customer_name", &self.customer_name)?;
        validate_non_empty_string("product", &self.product)?;
        validate_email("customer_email", &self.customer_email)?;
        validate_non_negative("quantity", self.quantity)?;
        validate_non_negative("amount", self.amount)?;
        parse_calendar_date(&self.timestamp)?;
        Ok(())
    }
}

impl SaleForm {
    pub fn into_record(self) -> SalesRecord {
        SalesRecord {
            timestamp: Some(self.timestamp),
            salesperson: Some(self.salesperson),
            product: Some(self.product),
            quantity: Some(self.quantity),
            amount: Some(self.amount),
            customer_name: Some(self.customer_name),
            customer_email: Some(self.customer_email),
        }
    }
}

/// Raw form fields for a new piece of feedback. The sentiment label is never
/// part of the form; it is derived at submission time.
#[derive(Debug, Clone)]
pub struct FeedbackForm {
    pub customer_name: String,
    pub product: String,
    pub rating: i64,
    pub feedback_text: String,
}

impl Validate for FeedbackForm {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("customer_name", &self.customer_name)?;
        validate_non_empty_string("product", &self.product)?;
        validate_range("rating", self.rating, 1, 5)?;
        // feedback_text may be empty; the classifier folds it to Negative.
        Ok(())
    }
}

impl FeedbackForm {
    pub fn into_record(self, sentiment: Sentiment) -> FeedbackRecord {
        FeedbackRecord {
            customer_name: self.customer_name,
            product: self.product,
            rating: Some(self.rating),
            feedback_text: self.feedback_text,
            sentiment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale_form() -> SaleForm {
        SaleForm {
            timestamp: "2026-03-14 02:30 PM".to_string(),
            salesperson: "Aisha".to_string(),
            customer_name: "Jordan Lee".to_string(),
            customer_email: "jordan@example.com".to_string(),
            product: "Laptop".to_string(),
            quantity: 2,
            amount: 2400.0,
        }
    }

    #[test]
    fn test_sale_form_valid() {
        assert!(sale_form().validate().is_ok());
    }

    #[test]
    fn test_sale_form_rejects_empty_fields() {
        let mut form = sale_form();
        form.product = "".to_string();
        assert!(matches!(
            form.validate(),
            Err(EngineError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_sale_form_rejects_negative_amount() {
        let mut form = sale_form();
        form.amount = -5.0;
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_sale_form_rejects_bad_timestamp() {
        let mut form = sale_form();
        form.timestamp = "yesterday-ish".to_string();
        assert!(matches!(
            form.validate(),
            Err(EngineError::DateParseError { .. })
        ));
    }

    #[test]
    fn test_feedback_form_rating_bounds() {
        let form = FeedbackForm {
            customer_name: "Sam".to_string(),
            product: "Headphones".to_string(),
            rating: 6,
            feedback_text: "fine".to_string(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_parse_calendar_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        assert_eq!(parse_calendar_date("2026-03-14").unwrap(), expected);
        assert_eq!(parse_calendar_date("2026-03-14 02:30 PM").unwrap(), expected);
        assert_eq!(parse_calendar_date("2026-03-14 14:30:00").unwrap(), expected);
        assert_eq!(parse_calendar_date("14/03/2026").unwrap(), expected);
        assert!(parse_calendar_date("March, sometime").is_err());
    }

    #[test]
    fn test_sentiment_labels() {
        assert_eq!(Sentiment::from_label("Positive"), Sentiment::Positive);
        assert_eq!(Sentiment::from_label("positive"), Sentiment::Positive);
        assert_eq!(Sentiment::from_label("Negative"), Sentiment::Negative);
        assert_eq!(Sentiment::from_label("meh"), Sentiment::Negative);
        assert_eq!(Sentiment::Positive.to_string(), "Positive");
    }
}
