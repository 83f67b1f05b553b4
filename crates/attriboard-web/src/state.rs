//! Shared application state for the web server.

use std::sync::Arc;

use tracing::warn;

use attriboard_data::DataContext;

use crate::config::Config;

/// Shared state injected into every Axum handler. The employee table is
/// read-only after startup, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub ctx: Arc<DataContext>,
    pub config: Config,
    /// Initial dropdown selection; always a department present in the data
    /// when the data has any rows.
    pub default_department: String,
}

impl AppState {
    pub fn new(config: Config, ctx: DataContext) -> Self {
        let default_department = resolve_default_department(&config, &ctx);
        Self {
            ctx: Arc::new(ctx),
            config,
            default_department,
        }
    }
}

pub type SharedState = Arc<AppState>;

/// The configured default if the data contains it, otherwise the first
/// distinct department in the file.
fn resolve_default_department(config: &Config, ctx: &DataContext) -> String {
    let configured = config.dashboard.default_department.as_str();
    let departments = ctx.departments();
    if departments.iter().any(|d| *d == configured) {
        return configured.to_string();
    }
    match departments.first() {
        Some(first) => {
            warn!(
                configured,
                fallback = *first,
                "configured default department not present in dataset"
            );
            first.to_string()
        }
        // Empty dataset: keep the configured value, charts degrade to empty.
        None => configured.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> DataContext {
        let csv = "\
EmployeeID,Attrition,Department,EducationField,Gender,OverTime,YearsAtCompany
1,No,Cardiology,Medical,Female,No,4
2,No,Maternity,Medical,Male,No,2
";
        DataContext::from_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_configured_default_kept_when_present() {
        let state = AppState::new(Config::default(), ctx());
        assert_eq!(state.default_department, "Maternity");
    }

    #[test]
    fn test_falls_back_to_first_department() {
        let mut config = Config::default();
        config.dashboard.default_department = "Oncology".to_string();
        let state = AppState::new(config, ctx());
        assert_eq!(state.default_department, "Cardiology");
    }
}
