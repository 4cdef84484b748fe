use crate::domain::model::{FeedbackRecord, SalesRecord, Sentiment};
use crate::utils::error::{EngineError, Result};
use csv::StringRecord;

/// Canonical sales header, the union of the two legacy layouts. New tables
/// are always written with this header; the reader also accepts the legacy
/// admin layout (`Date, Salesperson, ...`) and the old submission log
/// (`Date & Time, Customer Name, ..., Revenue ($), ...`).
pub const SALES_HEADERS: [&str; 7] = [
    "Date & Time",
    "Salesperson",
    "Customer Name",
    "Product",
    "Quantity Sold",
    "Amount",
    "Customer Email",
];

pub const FEEDBACK_HEADERS: [&str; 5] =
    ["Customer_Name", "Product", "Rating", "Feedback", "Sentiment"];

const TIMESTAMP_ALIASES: [&str; 2] = ["Date & Time", "Date"];
const SALESPERSON_ALIASES: [&str; 1] = ["Salesperson"];
const PRODUCT_ALIASES: [&str; 1] = ["Product"];
const QUANTITY_ALIASES: [&str; 3] = ["Quantity Sold", "Units Bought", "Quantity"];
const AMOUNT_ALIASES: [&str; 3] = ["Amount", "Revenue ($)", "Revenue"];
const CUSTOMER_NAME_ALIASES: [&str; 2] = ["Customer Name", "Customer_Name"];
const CUSTOMER_EMAIL_ALIASES: [&str; 2] = ["Customer Email", "Customer_Email"];

fn column_index(headers: &StringRecord, aliases: &[&str]) -> Option<usize> {
    headers.iter().position(|h| {
        let h = h.trim();
        aliases.iter().any(|a| h.eq_ignore_ascii_case(a))
    })
}

/// Missing column or blank cell both collapse to None.
fn cell(row: &StringRecord, index: Option<usize>) -> Option<String> {
    let value = row.get(index?)?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// A cell that does not read as a number coerces to None and is excluded
/// from sums downstream; a bad cell never fails the load.
fn coerce_int(value: Option<String>) -> Option<i64> {
    let value = value?;
    if let Ok(n) = value.parse::<i64>() {
        return Some(n);
    }
    value.parse::<f64>().ok().map(|f| f as i64)
}

fn coerce_float(value: Option<String>) -> Option<f64> {
    value?.parse::<f64>().ok()
}

/// Parse a raw sales table into canonical records. Malformed cells degrade to
/// None per field; only unreadable CSV content fails the whole load.
pub fn sales_from_csv(bytes: &[u8]) -> Result<Vec<SalesRecord>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(bytes);
    let headers = reader.headers()?.clone();

    let timestamp_col = column_index(&headers, &TIMESTAMP_ALIASES);
    let salesperson_col = column_index(&headers, &SALESPERSON_ALIASES);
    let product_col = column_index(&headers, &PRODUCT_ALIASES);
    let quantity_col = column_index(&headers, &QUANTITY_ALIASES);
    let amount_col = column_index(&headers, &AMOUNT_ALIASES);
    let customer_name_col = column_index(&headers, &CUSTOMER_NAME_ALIASES);
    let customer_email_col = column_index(&headers, &CUSTOMER_EMAIL_ALIASES);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(SalesRecord {
            timestamp: cell(&row, timestamp_col),
            salesperson: cell(&row, salesperson_col),
            product: cell(&row, product_col),
            quantity: coerce_int(cell(&row, quantity_col)),
            amount: coerce_float(cell(&row, amount_col)),
            customer_name: cell(&row, customer_name_col),
            customer_email: cell(&row, customer_email_col),
        });
    }

    Ok(records)
}

pub fn feedback_from_csv(bytes: &[u8]) -> Result<Vec<FeedbackRecord>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(bytes);
    let headers = reader.headers()?.clone();

    let name_col = column_index(&headers, &CUSTOMER_NAME_ALIASES);
    let product_col = column_index(&headers, &PRODUCT_ALIASES);
    let rating_col = column_index(&headers, &["Rating"]);
    let feedback_col = column_index(&headers, &["Feedback"]);
    let sentiment_col = column_index(&headers, &["Sentiment"]);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(FeedbackRecord {
            customer_name: cell(&row, name_col).unwrap_or_default(),
            product: cell(&row, product_col).unwrap_or_default(),
            rating: coerce_int(cell(&row, rating_col)),
            feedback_text: cell(&row, feedback_col).unwrap_or_default(),
            sentiment: Sentiment::from_label(&cell(&row, sentiment_col).unwrap_or_default()),
        });
    }

    Ok(records)
}

fn float_cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn int_cell(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn sales_to_csv(records: &[SalesRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(SALES_HEADERS)?;

    for record in records {
        writer.write_record([
            record.timestamp.clone().unwrap_or_default(),
            record.salesperson.clone().unwrap_or_default(),
            record.customer_name.clone().unwrap_or_default(),
            record.product.clone().unwrap_or_default(),
            int_cell(record.quantity),
            float_cell(record.amount),
            record.customer_email.clone().unwrap_or_default(),
        ])?;
    }

    writer.into_inner().map_err(|e| EngineError::StorageError {
        message: e.to_string(),
    })
}

pub fn feedback_to_csv(records: &[FeedbackRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(FEEDBACK_HEADERS)?;

    for record in records {
        writer.write_record([
            record.customer_name.clone(),
            record.product.clone(),
            int_cell(record.rating),
            record.feedback_text.clone(),
            record.sentiment.to_string(),
        ])?;
    }

    writer.into_inner().map_err(|e| EngineError::StorageError {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_layout_loads() {
        let csv = b"Date,Salesperson,Product,Quantity Sold,Amount\n\
                    2026-01-05,Aisha,Laptop,2,2400\n\
                    2026-01-06,Ben,Mouse,5,75.50\n";
        let records = sales_from_csv(csv).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].timestamp.as_deref(), Some("2026-01-05"));
        assert_eq!(records[0].salesperson.as_deref(), Some("Aisha"));
        assert_eq!(records[0].quantity, Some(2));
        assert_eq!(records[1].amount, Some(75.5));
        assert_eq!(records[0].customer_name, None);
        assert_eq!(records[0].customer_email, None);
    }

    #[test]
    fn test_submission_log_layout_loads() {
        let csv = b"Date & Time,Customer Name,Product,Units Bought,Revenue ($),Customer Email\n\
                    2026-01-05 02:30 PM,Jordan Lee,Laptop,1,1200,jordan@example.com\n";
        let records = sales_from_csv(csv).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].timestamp.as_deref(), Some("2026-01-05 02:30 PM"));
        assert_eq!(records[0].customer_name.as_deref(), Some("Jordan Lee"));
        assert_eq!(records[0].quantity, Some(1));
        assert_eq!(records[0].amount, Some(1200.0));
        assert_eq!(records[0].salesperson, None);
    }

    #[test]
    fn test_missing_column_becomes_none() {
        let csv = b"Date,Salesperson,Product,Amount\n2026-01-05,Aisha,Laptop,2400\n";
        let records = sales_from_csv(csv).unwrap();

        assert_eq!(records[0].quantity, None);
        assert_eq!(records[0].amount, Some(2400.0));
    }

    #[test]
    fn test_malformed_cells_coerce_to_none() {
        let csv = b"Date,Salesperson,Product,Quantity Sold,Amount\n\
                    2026-01-05,Aisha,Laptop,two,lots\n";
        let records = sales_from_csv(csv).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].quantity, None);
        assert_eq!(records[0].amount, None);
        assert_eq!(records[0].salesperson.as_deref(), Some("Aisha"));
    }

    #[test]
    fn test_ragged_rows_tolerated() {
        let csv = b"Date,Salesperson,Product,Quantity Sold,Amount\n2026-01-05,Aisha\n";
        let records = sales_from_csv(csv).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].product, None);
        assert_eq!(records[0].amount, None);
    }

    #[test]
    fn test_sales_round_trip() {
        let csv = b"Date & Time,Customer Name,Product,Units Bought,Revenue ($),Customer Email\n\
                    2026-01-05 02:30 PM,Jordan Lee,Laptop,1,1200,jordan@example.com\n";
        let records = sales_from_csv(csv).unwrap();
        let rewritten = sales_to_csv(&records).unwrap();
        let reloaded = sales_from_csv(&rewritten).unwrap();

        assert_eq!(records, reloaded);
    }

    #[test]
    fn test_feedback_round_trip() {
        let csv = b"Customer_Name,Product,Rating,Feedback,Sentiment\n\
                    Sam,Headphones,5,Great sound,Positive\n\
                    Kim,Cable,1,Broke in a week,Negative\n";
        let records = feedback_from_csv(csv).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sentiment, Sentiment::Positive);
        assert_eq!(records[1].rating, Some(1));

        let rewritten = feedback_to_csv(&records).unwrap();
        assert_eq!(feedback_from_csv(&rewritten).unwrap(), records);
    }

    #[test]
    fn test_unknown_sentiment_label_folds_negative() {
        let csv = b"Customer_Name,Product,Rating,Feedback,Sentiment\nSam,Cable,3,ok,Neutral\n";
        let records = feedback_from_csv(csv).unwrap();
        assert_eq!(records[0].sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_empty_input_is_empty_table() {
        assert!(sales_from_csv(b"").unwrap().is_empty());
        assert!(feedback_from_csv(b"").unwrap().is_empty());
    }
}
