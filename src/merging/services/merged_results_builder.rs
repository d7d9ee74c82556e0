use crate::merging::domain::{
    AnalyzerResult, Identifier, MergedAnalyzerResult, Package, Project, Repository, VcsInfo,
};
use crate::merging::policies::PackageConflictPolicy;
use crate::shared::error::MergeError;
use crate::shared::Result;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// MergedResultsBuilder service accumulating per-project analyzer results
///
/// Results are registered one at a time together with the path of the file
/// they were read from. Projects, provenance paths and error lists are keyed
/// by project identifier, so registering the same project twice keeps the last
/// registration. Packages are merged by identifier across all results.
///
/// The builder holds no I/O dependencies; `build` is a pure projection of the
/// accumulated state and may be called any number of times.
#[derive(Debug, Clone)]
pub struct MergedResultsBuilder {
    allow_dynamic_versions: bool,
    repository: Repository,
    conflict_policy: PackageConflictPolicy,
    projects: BTreeMap<Identifier, Project>,
    project_results_files: BTreeMap<Identifier, String>,
    packages: BTreeMap<Identifier, Package>,
    package_origins: BTreeMap<Identifier, String>,
    errors: BTreeMap<Identifier, Vec<String>>,
}

impl MergedResultsBuilder {
    /// Creates a builder for the repository rooted at `repository_path`
    ///
    /// # Errors
    /// Returns an error if a relative `repository_path` cannot be made absolute.
    pub fn new(allow_dynamic_versions: bool, repository_path: &Path, vcs: VcsInfo) -> Result<Self> {
        let repository = Repository::from_path(repository_path, vcs)?;
        Ok(Self::for_repository(allow_dynamic_versions, repository))
    }

    /// Creates a builder for an already described repository
    pub fn for_repository(allow_dynamic_versions: bool, repository: Repository) -> Self {
        Self {
            allow_dynamic_versions,
            repository,
            conflict_policy: PackageConflictPolicy::default(),
            projects: BTreeMap::new(),
            project_results_files: BTreeMap::new(),
            packages: BTreeMap::new(),
            package_origins: BTreeMap::new(),
            errors: BTreeMap::new(),
        }
    }

    pub fn with_conflict_policy(mut self, policy: PackageConflictPolicy) -> Self {
        self.conflict_policy = policy;
        self
    }

    pub fn contains_project(&self, id: &Identifier) -> bool {
        self.projects.contains_key(id)
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    /// Registers the analyzer result read from `source_file_path`
    ///
    /// # Errors
    /// With `PackageConflictPolicy::Reject`, returns
    /// `MergeError::ConflictingPackage` if the result contains a package whose
    /// metadata differs from an already registered package with the same
    /// identifier, or from another package with the same identifier in the
    /// same result. The builder is left unchanged in that case. With
    /// `KeepFirst`, same-identifier packages within one result keep the one
    /// that sorts first.
    pub fn add_result(&mut self, source_file_path: &str, result: AnalyzerResult) -> Result<()> {
        self.check_package_conflicts(source_file_path, &result.packages)?;

        let AnalyzerResult {
            project,
            packages,
            errors,
            ..
        } = result;
        let project_id = project.id.clone();

        for package in packages {
            if !self.packages.contains_key(&package.id) {
                self.package_origins
                    .insert(package.id.clone(), source_file_path.to_string());
                self.packages.insert(package.id.clone(), package);
            }
        }

        self.project_results_files
            .insert(project_id.clone(), source_file_path.to_string());
        self.errors.insert(project_id.clone(), errors);
        self.projects.insert(project_id, project);

        Ok(())
    }

    fn check_package_conflicts(
        &self,
        source_file_path: &str,
        packages: &BTreeSet<Package>,
    ) -> Result<()> {
        // A set is ordered by id first, so packages sharing an id are adjacent.
        let mut previous: Option<&Package> = None;
        for package in packages {
            if let Some(earlier) = previous.filter(|earlier| earlier.id == package.id) {
                if !self.conflict_policy.accepts(earlier, package) {
                    return Err(MergeError::ConflictingPackage {
                        package: package.id.clone(),
                        first_file: source_file_path.to_string(),
                        second_file: source_file_path.to_string(),
                    }
                    .into());
                }
            }
            previous = Some(package);

            if let Some(existing) = self.packages.get(&package.id) {
                if !self.conflict_policy.accepts(existing, package) {
                    return Err(MergeError::ConflictingPackage {
                        package: package.id.clone(),
                        first_file: self
                            .package_origins
                            .get(&package.id)
                            .cloned()
                            .unwrap_or_default(),
                        second_file: source_file_path.to_string(),
                    }
                    .into());
                }
            }
        }
        Ok(())
    }

    /// Produces the immutable merged snapshot of everything registered so far
    pub fn build(&self) -> MergedAnalyzerResult {
        MergedAnalyzerResult::new(
            self.allow_dynamic_versions,
            self.repository.clone(),
            self.projects.values().cloned().collect(),
            self.project_results_files.clone(),
            self.packages.values().cloned().collect(),
            self.errors.clone(),
        )
    }
}
