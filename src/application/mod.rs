pub mod dashboard;
pub mod form_state;
pub mod premium_panel;
pub mod render;
