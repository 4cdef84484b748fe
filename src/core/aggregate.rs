use crate::domain::model::SalesRecord;
use crate::utils::error::Result;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

pub const NO_TOP_SALESPERSON: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Salesperson,
    Product,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Amount,
    Quantity,
}

/// One row of a chart table: a grouping key and its summed measure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedTotal {
    pub key: String,
    pub total: f64,
}

/// The scalar metrics shown on the admin dashboard cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiSummary {
    pub total_sales: f64,
    pub transactions: usize,
    pub top_salesperson: String,
    pub total_units: i64,
}

/// Sum of `amount` over all records. Cells coerced to None by normalization
/// simply do not contribute; the empty table sums to zero.
pub fn total_amount(records: &[SalesRecord]) -> f64 {
    records.iter().filter_map(|r| r.amount).sum()
}

pub fn transaction_count(records: &[SalesRecord]) -> usize {
    records.len()
}

/// Sum of `quantity`; zero when the column never made it into the table.
pub fn total_units(records: &[SalesRecord]) -> i64 {
    records.iter().filter_map(|r| r.quantity).sum()
}

/// Salesperson with the highest summed amount, skipping groups whose total is
/// zero or negative. Ties go to the group seen first in the input.
pub fn top_salesperson(records: &[SalesRecord]) -> String {
    let groups = stable_group_sum(
        records
            .iter()
            .filter_map(|r| r.salesperson.clone().map(|key| (key, r.amount.unwrap_or(0.0)))),
    );

    let mut best: Option<&GroupedTotal> = None;
    for group in groups.iter().filter(|g| g.total > 0.0) {
        match best {
            Some(current) if group.total <= current.total => {}
            _ => best = Some(group),
        }
    }

    best.map(|g| g.key.clone())
        .unwrap_or_else(|| NO_TOP_SALESPERSON.to_string())
}

/// Grouped totals for the chart views. Salesperson and product groups keep
/// first-encountered order; date groups come back in chronological order.
///
/// Date grouping is strict: any record whose timestamp cannot be read as a
/// calendar date fails the whole call. A chronological axis never renders
/// from partial data.
pub fn group_sum(
    records: &[SalesRecord],
    by: GroupBy,
    measure: Measure,
) -> Result<Vec<GroupedTotal>> {
    let value = |r: &SalesRecord| match measure {
        Measure::Amount => r.amount.unwrap_or(0.0),
        Measure::Quantity => r.quantity.unwrap_or(0) as f64,
    };

    match by {
        GroupBy::Salesperson => Ok(stable_group_sum(
            records
                .iter()
                .filter_map(|r| r.salesperson.clone().map(|key| (key, value(r)))),
        )),
        GroupBy::Product => Ok(stable_group_sum(
            records
                .iter()
                .filter_map(|r| r.product.clone().map(|key| (key, value(r)))),
        )),
        GroupBy::Date => {
            let mut by_date: BTreeMap<chrono::NaiveDate, f64> = BTreeMap::new();
            for record in records {
                let date = record.calendar_date()?;
                *by_date.entry(date).or_insert(0.0) += value(record);
            }
            Ok(by_date
                .into_iter()
                .map(|(date, total)| GroupedTotal {
                    key: date.format("%Y-%m-%d").to_string(),
                    total,
                })
                .collect())
        }
    }
}

pub fn kpis(records: &[SalesRecord]) -> KpiSummary {
    KpiSummary {
        total_sales: total_amount(records),
        transactions: transaction_count(records),
        top_salesperson: top_salesperson(records),
        total_units: total_units(records),
    }
}

fn stable_group_sum(pairs: impl Iterator<Item = (String, f64)>) -> Vec<GroupedTotal> {
    let mut order: Vec<GroupedTotal> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (key, value) in pairs {
        match index.get(&key) {
            Some(&i) => order[i].total += value,
            None => {
                index.insert(key.clone(), order.len());
                order.push(GroupedTotal { key, total: value });
            }
        }
    }

    order
}
