pub mod charts;
pub mod http;
pub mod storage;
