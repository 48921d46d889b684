pub mod api_response;
pub mod validation;

pub use api_response::ApiResponse;
