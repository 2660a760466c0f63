pub mod file_key_store;
pub mod memory;
