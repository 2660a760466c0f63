pub mod chart_canvas;
pub mod credential_store;
pub mod pricing_service;
