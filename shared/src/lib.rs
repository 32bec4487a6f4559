pub mod api;
pub mod error;
pub mod models;
pub mod response;

pub use error::{InvalidResponse, SettingsError};
pub use models::{PasswordForm, UserProfile};
