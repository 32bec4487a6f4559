pub mod api;
pub mod credentials;
pub mod lifecycle;
