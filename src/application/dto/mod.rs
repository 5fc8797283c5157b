/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod attribution_request;
mod attribution_response;

pub use attribution_request::{AttributionRequest, DEFAULT_CONCURRENCY};
pub use attribution_response::AttributionResponse;
