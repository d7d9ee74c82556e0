mod merged_results_builder;

pub use merged_results_builder::MergedResultsBuilder;
