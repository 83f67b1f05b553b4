//! Group-by aggregations over the employee table.
//!
//! Each function walks the record slice once and produces a small summary
//! table. Ordering is deterministic so repeated calls yield identical
//! figures downstream.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use attriboard_data::DataContext;

/// One (group key, attrition label) cell with its row count.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GroupCount {
    pub key: String,
    pub attrition: String,
    pub count: u64,
}

/// One group with the number of attrition == "Yes" rows in it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AttritionSum {
    pub key: String,
    pub leavers: u64,
}

/// Count rows per (key, attrition) pair, sorted by count descending.
/// Ties break on key then attrition label so ordering is total.
fn attrition_counts_by<F>(ctx: &DataContext, key_of: F) -> Vec<GroupCount>
where
    F: Fn(&attriboard_data::EmployeeRecord) -> &str,
{
    let mut counts: HashMap<(String, String), u64> = HashMap::new();
    for record in ctx.records() {
        let cell = (key_of(record).to_string(), record.attrition.clone());
        *counts.entry(cell).or_insert(0) += 1;
    }

    let mut rows: Vec<GroupCount> = counts
        .into_iter()
        .map(|((key, attrition), count)| GroupCount {
            key,
            attrition,
            count,
        })
        .collect();
    rows.sort_by(|a, b| {
        (Reverse(a.count), &a.key, &a.attrition).cmp(&(Reverse(b.count), &b.key, &b.attrition))
    });
    rows
}

/// Rows per (Department, Attrition) pair, largest groups first.
pub fn department_attrition_counts(ctx: &DataContext) -> Vec<GroupCount> {
    attrition_counts_by(ctx, |r| r.department.as_str())
}

/// Rows per (EducationField, Attrition) pair, largest groups first.
pub fn education_field_attrition_counts(ctx: &DataContext) -> Vec<GroupCount> {
    attrition_counts_by(ctx, |r| r.education_field.as_str())
}

/// Leaver count per group key, keys in ascending order (the attrition flag
/// mapped Yes→1 / No→0 and summed, as the source dashboard does).
fn attrition_sum_by<F>(ctx: &DataContext, key_of: F) -> Vec<AttritionSum>
where
    F: Fn(&attriboard_data::EmployeeRecord) -> &str,
{
    let mut sums: BTreeMap<String, u64> = BTreeMap::new();
    for record in ctx.records() {
        let entry = sums.entry(key_of(record).to_string()).or_insert(0);
        if record.has_left() {
            *entry += 1;
        }
    }
    sums.into_iter()
        .map(|(key, leavers)| AttritionSum { key, leavers })
        .collect()
}

/// Leavers per overtime flag ("No", "Yes").
pub fn attrition_by_overtime(ctx: &DataContext) -> Vec<AttritionSum> {
    attrition_sum_by(ctx, |r| r.over_time.as_str())
}

/// Leavers per gender.
pub fn attrition_by_gender(ctx: &DataContext) -> Vec<AttritionSum> {
    attrition_sum_by(ctx, |r| r.gender.as_str())
}
