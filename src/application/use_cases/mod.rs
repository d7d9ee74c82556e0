/// Use cases module containing application business logic orchestration
mod merge_results;
mod split_results;

pub use merge_results::MergeResultsUseCase;
pub use split_results::SplitResultsUseCase;
