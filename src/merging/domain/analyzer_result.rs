use super::{Package, Project};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Output of one analyzer run for one project
///
/// `errors` keeps the order in which the analyzer emitted them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerResult {
    pub allow_dynamic_versions: bool,
    pub project: Project,
    #[serde(default)]
    pub packages: BTreeSet<Package>,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl AnalyzerResult {
    pub fn new(
        allow_dynamic_versions: bool,
        project: Project,
        packages: BTreeSet<Package>,
        errors: Vec<String>,
    ) -> Self {
        Self {
            allow_dynamic_versions,
            project,
            packages,
            errors,
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
