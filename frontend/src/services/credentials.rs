use std::fmt;
use std::rc::Rc;

use web_sys::Storage;

/// Source of the bearer token used for authenticated requests.
pub trait CredentialProvider {
    fn auth_token(&self) -> Option<String>;
}

/// Reads the token the login flow left in browser local storage.
///
/// The value is stored as a raw string, not JSON. Storage that the browser
/// refuses to hand out (blocked cookies, sandboxed frames) reads as no token.
#[derive(Debug, Clone)]
pub struct LocalStorageCredentials {
    key: String,
}

impl LocalStorageCredentials {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl CredentialProvider for LocalStorageCredentials {
    fn auth_token(&self) -> Option<String> {
        token_from_storage(local_storage(), &self.key)
    }
}

fn local_storage() -> Option<Storage> {
    let window = web_sys::window()?;
    match window.local_storage() {
        Ok(storage) => storage,
        Err(e) => {
            tracing::warn!(error = ?e, "Local storage is not accessible");
            None
        }
    }
}

fn token_from_storage(storage: Option<Storage>, key: &str) -> Option<String> {
    let Some(storage) = storage else {
        tracing::warn!(%key, "No local storage, treating token as absent");
        return None;
    };

    match storage.get_item(key) {
        Ok(token) => token.filter(|token| !token.is_empty()),
        Err(e) => {
            tracing::warn!(%key, error = ?e, "Failed to read local storage");
            None
        }
    }
}

/// Fixed token, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials(Option<String>);

impl StaticCredentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn missing() -> Self {
        Self(None)
    }
}

impl CredentialProvider for StaticCredentials {
    fn auth_token(&self) -> Option<String> {
        self.0.clone().filter(|token| !token.is_empty())
    }
}

/// Shared handle to a provider, usable as a component property.
#[derive(Clone)]
pub struct Credentials(Rc<dyn CredentialProvider>);

impl Credentials {
    pub fn new(provider: impl CredentialProvider + 'static) -> Self {
        Self(Rc::new(provider))
    }

    pub fn local_storage(key: &str) -> Self {
        Self::new(LocalStorageCredentials::new(key))
    }

    pub fn auth_token(&self) -> Option<String> {
        self.0.auth_token()
    }
}

impl CredentialProvider for Credentials {
    fn auth_token(&self) -> Option<String> {
        self.0.auth_token()
    }
}

impl PartialEq for Credentials {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credentials(..)")
    }
}
