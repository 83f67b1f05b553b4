//! The immutable in-memory dataset shared by every dashboard component.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use tracing::{debug, info};

use attriboard_common::{AttriboardError, Result};

use crate::record::EmployeeRecord;

/// Column headers the loader requires. Anything else in the file is ignored.
const REQUIRED_COLUMNS: &[&str] = &[
    "EmployeeID",
    "Department",
    "EducationField",
    "Gender",
    "OverTime",
    "Attrition",
    "YearsAtCompany",
];

/// The loaded employee table. Read-only after construction; chart builders
/// and handlers receive it behind a shared reference.
#[derive(Debug, Clone)]
pub struct DataContext {
    records: Vec<EmployeeRecord>,
}

impl DataContext {
    /// Load the dataset from a CSV file. A missing file or a header that
    /// lacks any required column is a fatal startup error.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset file: {}", path.display()))?;

        let ctx = Self::from_reader(content.as_bytes())
            .with_context(|| format!("Failed to parse dataset file: {}", path.display()))?;

        info!(
            "Loaded {} employee records from {}",
            ctx.headcount(),
            path.display()
        );
        Ok(ctx)
    }

    /// Load the dataset from any reader. Used directly by tests.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .filter(|col| !headers.iter().any(|h| h == **col))
            .copied()
            .collect();
        if !missing.is_empty() {
            return Err(AttriboardError::SchemaMismatch(format!(
                "missing required column(s): {}",
                missing.join(", ")
            )));
        }

        let mut records = Vec::new();
        for result in csv_reader.deserialize::<EmployeeRecord>() {
            records.push(result?);
        }

        debug!("Parsed {} rows", records.len());
        Ok(Self { records })
    }

    /// All rows, in file order.
    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    /// Total employee count (summary card).
    pub fn headcount(&self) -> usize {
        self.records.len()
    }

    /// Number of employees with attrition == "Yes" (summary card).
    pub fn attrition_count(&self) -> usize {
        self.records.iter().filter(|r| r.has_left()).count()
    }

    /// Distinct department labels in first-seen order. Populates the
    /// department dropdown, so this is the input domain of the tenure chart.
    pub fn departments(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.department.as_str()) {
                seen.push(record.department.as_str());
            }
        }
        seen
    }

    /// Tenure values (years at company) for one department. Empty for a
    /// department label that matches no rows.
    pub fn tenure_for_department(&self, department: &str) -> Vec<u32> {
        self.records
            .iter()
            .filter(|r| r.department == department)
            .map(|r| r.years_at_company)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // Header mirrors the real file: required columns interleaved with ones
    // the loader ignores.
    const SAMPLE_CSV: &str = "\
EmployeeID,Age,Attrition,Department,EducationField,Gender,OverTime,YearsAtCompany,MonthlyIncome
1,41,Yes,Cardiology,Medical,Female,Yes,6,5993
2,49,No,Maternity,Life Sciences,Male,No,10,5130
3,37,Yes,Maternity,Other,Male,Yes,0,2090
4,33,No,Neurology,Medical,Female,Yes,8,2909
5,27,No,Cardiology,Technical Degree,Male,No,2,3468
";

    #[test]
    fn test_loads_rows_ignoring_unknown_columns() {
        let ctx = DataContext::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(ctx.headcount(), 5);
        assert_eq!(ctx.records()[0].employee_id, 1);
        assert_eq!(ctx.records()[0].department, "Cardiology");
        assert_eq!(ctx.records()[2].years_at_company, 0);
    }

    #[test]
    fn test_attrition_count() {
        let ctx = DataContext::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(ctx.attrition_count(), 2);
    }

    #[test]
    fn test_departments_first_seen_order() {
        let ctx = DataContext::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(ctx.departments(), vec!["Cardiology", "Maternity", "Neurology"]);
    }

    #[test]
    fn test_tenure_filter() {
        let ctx = DataContext::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(ctx.tenure_for_department("Maternity"), vec![10, 0]);
        assert_eq!(ctx.tenure_for_department("Oncology"), Vec::<u32>::new());
    }

    #[test]
    fn test_missing_column_is_schema_mismatch() {
        let csv = "EmployeeID,Attrition,Department\n1,Yes,Cardiology\n";
        let err = DataContext::from_reader(csv.as_bytes()).unwrap_err();
        match err {
            AttriboardError::SchemaMismatch(msg) => {
                assert!(msg.contains("EducationField"), "unexpected message: {msg}");
                assert!(msg.contains("YearsAtCompany"), "unexpected message: {msg}");
            }
            other => panic!("expected SchemaMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_row_set_loads() {
        let csv = "EmployeeID,Attrition,Department,EducationField,Gender,OverTime,YearsAtCompany\n";
        let ctx = DataContext::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(ctx.headcount(), 0);
        assert_eq!(ctx.attrition_count(), 0);
        assert!(ctx.departments().is_empty());
    }

    #[test]
    fn test_unparseable_cell_is_an_error() {
        let csv = "\
EmployeeID,Attrition,Department,EducationField,Gender,OverTime,YearsAtCompany
1,Yes,Cardiology,Medical,Female,Yes,not-a-number
";
        assert!(DataContext::from_reader(csv.as_bytes()).is_err());
    }
}
