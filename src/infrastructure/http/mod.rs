pub mod collar_api;
