//! The per-employee row type deserialized from the input CSV.

use serde::{Deserialize, Serialize};

/// One employee row. Column names follow the Watson healthcare dataset;
/// columns not listed here are ignored during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployeeRecord {
    #[serde(rename = "EmployeeID")]
    pub employee_id: u32,

    #[serde(rename = "Department")]
    pub department: String,

    #[serde(rename = "EducationField")]
    pub education_field: String,

    #[serde(rename = "Gender")]
    pub gender: String,

    /// "Yes" / "No"
    #[serde(rename = "OverTime")]
    pub over_time: String,

    /// "Yes" / "No"
    #[serde(rename = "Attrition")]
    pub attrition: String,

    #[serde(rename = "YearsAtCompany")]
    pub years_at_company: u32,
}

impl EmployeeRecord {
    /// Whether this employee has left the organization.
    pub fn has_left(&self) -> bool {
        self.attrition == "Yes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_left_matches_attrition_flag() {
        let mut record = EmployeeRecord {
            employee_id: 1,
            department: "Cardiology".to_string(),
            education_field: "Medical".to_string(),
            gender: "Female".to_string(),
            over_time: "No".to_string(),
            attrition: "Yes".to_string(),
            years_at_company: 4,
        };
        assert!(record.has_left());

        record.attrition = "No".to_string();
        assert!(!record.has_left());
    }
}
