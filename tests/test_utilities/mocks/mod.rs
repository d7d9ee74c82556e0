/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_result_file_reader;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_result_file_reader::MockResultFileReader;
