/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod merge_request;
mod merge_response;
mod result_format;
mod split_request;
mod split_response;

pub use merge_request::MergeRequest;
pub use merge_response::MergeResponse;
pub use result_format::ResultFormat;
pub use split_request::SplitRequest;
pub use split_response::{SplitResponse, SplitResult};
