use crate::config::ReportConfig;
use crate::telemetry::Limits;

/// Static text and full-scale constants passed into the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTemplate {
    pub title: String,
    pub project: String,
    /// Hardware description, one entry per line; empty entries are blank lines
    pub system_spec: Vec<String>,
    /// Expected control behaviour, printed verbatim
    pub interpretation: Vec<String>,
    pub limits: Limits,
}

impl ReportTemplate {
    pub fn from_config(report: &ReportConfig, limits: Limits) -> Self {
        Self {
            title: report.title.clone(),
            project: report.project.clone(),
            system_spec: report.system_spec.clone(),
            interpretation: report.interpretation.clone(),
            limits,
        }
    }
}

impl Default for ReportTemplate {
    fn default() -> Self {
        Self::from_config(&ReportConfig::default(), Limits::default())
    }
}
