use crate::merging::domain::VcsInfo;
use crate::merging::policies::PackageConflictPolicy;
use std::path::PathBuf;

/// MergeRequest - Internal request DTO for the merge use case
#[derive(Debug, Clone)]
pub struct MergeRequest {
    /// Root directory of the analyzed repository
    pub repository_path: PathBuf,
    /// Version control metadata of the repository
    pub vcs: VcsInfo,
    /// Analyzer result files, in registration order
    pub result_files: Vec<PathBuf>,
    /// Batch-wide policy flag copied into the merged result
    pub allow_dynamic_versions: bool,
    /// How to treat packages with equal identifiers but different metadata
    pub conflict_policy: PackageConflictPolicy,
}

impl MergeRequest {
    pub fn new(
        repository_path: PathBuf,
        result_files: Vec<PathBuf>,
        allow_dynamic_versions: bool,
    ) -> Self {
        Self {
            repository_path,
            vcs: VcsInfo::EMPTY,
            result_files,
            allow_dynamic_versions,
            conflict_policy: PackageConflictPolicy::default(),
        }
    }

    pub fn with_vcs(mut self, vcs: VcsInfo) -> Self {
        self.vcs = vcs;
        self
    }

    pub fn with_conflict_policy(mut self, conflict_policy: PackageConflictPolicy) -> Self {
        self.conflict_policy = conflict_policy;
        self
    }
}
