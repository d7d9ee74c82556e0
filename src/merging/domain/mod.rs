pub mod analyzer_result;
pub mod identifier;
pub mod merged_analyzer_result;
pub mod package;
pub mod project;
pub mod repository;
pub mod scope;
pub mod vcs_info;

pub use analyzer_result::AnalyzerResult;
pub use identifier::Identifier;
pub use merged_analyzer_result::MergedAnalyzerResult;
pub use package::{Package, PackageReference};
pub use project::Project;
pub use repository::Repository;
pub use scope::Scope;
pub use vcs_info::{RemoteArtifact, VcsInfo};
