pub mod credential_transport;
pub mod expiration_list;
pub mod form_field;
pub mod money;
