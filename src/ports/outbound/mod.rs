/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, codecs).
pub mod output_presenter;
pub mod progress_reporter;
pub mod result_file_reader;
pub mod result_serializer;

pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use result_file_reader::ResultFileReader;
pub use result_serializer::ResultSerializer;
