//! analyzer-merge - consolidate per-project dependency analyzer results
//!
//! Multi-module repositories produce one analyzer result file per module.
//! This library merges those results into a single deterministically ordered
//! snapshot, deduplicating packages across modules while recording which file
//! each project came from, and reconstructs the original per-project results
//! from that snapshot on demand.
//!
//! # Architecture
//!
//! - **Domain Layer** (`merging`): Data model, merge builder and policies
//! - **Application Layer** (`application`): Merge and split use cases
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): File system, serializers and console output
//! - **Shared** (`shared`): Error types, result alias and file safety checks
//!
//! # Example
//!
//! ```
//! use analyzer_merge::prelude::*;
//! use std::collections::BTreeSet;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! let lib = Package::new(Identifier::new("Maven", "org.example", "lib", "1.0"));
//! let scope = Scope::new("compile", true, BTreeSet::from([lib.to_reference()]));
//! let project = Project::new(
//!     Identifier::new("Gradle", "org.example", "app", "1.0"),
//!     BTreeSet::from([scope]),
//! );
//! let result = AnalyzerResult::new(false, project, BTreeSet::from([lib]), vec![]);
//!
//! let mut builder = MergedResultsBuilder::new(false, Path::new("/repo"), VcsInfo::EMPTY)?;
//! builder.add_result("/app/analyzer-result.yml", result.clone())?;
//!
//! let merged = builder.build();
//! assert_eq!(merged.create_analyzer_results()?, vec![result]);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod merging;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::serializers::{JsonSerializer, YamlSerializer};
    pub use crate::application::dto::{
        MergeRequest, MergeResponse, ResultFormat, SplitRequest, SplitResponse, SplitResult,
    };
    pub use crate::application::use_cases::{MergeResultsUseCase, SplitResultsUseCase};
    pub use crate::merging::domain::{
        AnalyzerResult, Identifier, MergedAnalyzerResult, Package, PackageReference, Project,
        RemoteArtifact, Repository, Scope, VcsInfo,
    };
    pub use crate::merging::policies::PackageConflictPolicy;
    pub use crate::merging::services::MergedResultsBuilder;
    pub use crate::ports::inbound::{ResultMergingPort, ResultSplittingPort};
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, ResultFileReader, ResultSerializer,
    };
    pub use crate::shared::error::{ExitCode, MergeError};
    pub use crate::shared::Result;
}
