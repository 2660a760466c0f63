pub mod chart;
pub mod field_chain;
pub mod premium_view;
pub mod result_view;
