mod package_conflict;

pub use package_conflict::PackageConflictPolicy;
