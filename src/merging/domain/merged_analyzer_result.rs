use super::{AnalyzerResult, Identifier, Package, Project, Repository};
use crate::shared::error::MergeError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// MergedAnalyzerResult aggregate consolidating many analyzer results
///
/// Every collection is ordered by identifier, so two snapshots built from the
/// same inputs serialize identically regardless of registration order.
/// Instances are produced by `MergedResultsBuilder::build` or by decoding a
/// serialized snapshot, and are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedAnalyzerResult {
    allow_dynamic_versions: bool,
    repository: Repository,
    projects: BTreeSet<Project>,
    project_results_files: BTreeMap<Identifier, String>,
    packages: BTreeSet<Package>,
    errors: BTreeMap<Identifier, Vec<String>>,
}

impl MergedAnalyzerResult {
    pub fn new(
        allow_dynamic_versions: bool,
        repository: Repository,
        projects: BTreeSet<Project>,
        project_results_files: BTreeMap<Identifier, String>,
        packages: BTreeSet<Package>,
        errors: BTreeMap<Identifier, Vec<String>>,
    ) -> Self {
        Self {
            allow_dynamic_versions,
            repository,
            projects,
            project_results_files,
            packages,
            errors,
        }
    }

    pub fn allow_dynamic_versions(&self) -> bool {
        self.allow_dynamic_versions
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn projects(&self) -> &BTreeSet<Project> {
        &self.projects
    }

    pub fn project_results_files(&self) -> &BTreeMap<Identifier, String> {
        &self.project_results_files
    }

    pub fn packages(&self) -> &BTreeSet<Package> {
        &self.packages
    }

    pub fn errors(&self) -> &BTreeMap<Identifier, Vec<String>> {
        &self.errors
    }

    /// Returns the analyzer result file the project was registered from
    pub fn results_file_for(&self, id: &Identifier) -> Option<&str> {
        self.project_results_files.get(id).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        self.errors.values().any(|errors| !errors.is_empty())
    }

    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Reconstructs the per-project analyzer results
    ///
    /// One result is produced per project, in identifier order. Each result
    /// contains only the packages reachable from its project's scopes.
    ///
    /// Registration order is not recorded, so results come back in the order
    /// they were registered only if they were registered sorted by project
    /// identifier. Pair results with their source files through
    /// `results_file_for` rather than by position.
    ///
    /// # Errors
    /// Returns `MergeError::UnresolvedPackageReference` if a scope refers to a
    /// package that is missing from the merged package set.
    pub fn create_analyzer_results(&self) -> Result<Vec<AnalyzerResult>> {
        let packages_by_id: BTreeMap<&Identifier, &Package> =
            self.packages.iter().map(|package| (&package.id, package)).collect();

        self.projects
            .iter()
            .map(|project| self.create_analyzer_result(project, &packages_by_id))
            .collect()
    }

    fn create_analyzer_result(
        &self,
        project: &Project,
        packages_by_id: &BTreeMap<&Identifier, &Package>,
    ) -> Result<AnalyzerResult> {
        let packages = project
            .collect_referenced_ids()
            .into_iter()
            .map(|id| match packages_by_id.get(&id) {
                Some(package) => Ok((*package).clone()),
                None => Err(MergeError::UnresolvedPackageReference {
                    project: project.id.clone(),
                    package: id,
                }),
            })
            .collect::<std::result::Result<BTreeSet<_>, _>>()?;

        let errors = self.errors.get(&project.id).cloned().unwrap_or_default();

        Ok(AnalyzerResult::new(
            self.allow_dynamic_versions,
            project.clone(),
            packages,
            errors,
        ))
    }
}
