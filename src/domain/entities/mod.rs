pub mod collar_request;
pub mod collar_result;
pub mod premium_result;
