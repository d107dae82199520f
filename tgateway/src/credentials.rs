//! Secret handling for the provider credential.
//!
//! The credential is resolved once at process startup and only ever
//! lives in a trusted server context. Nothing client-deployable holds
//! or reconstructs it.

use crate::ProviderError;

#[derive(Clone, PartialEq, Eq)]
pub struct SecretString {
    value: String,
}

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn expose(&self) -> &str {
        self.value.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        unsafe {
            self.value.as_mut_vec().fill(0);
        }
    }
}

/// Reads the provider credential from the named environment variable.
/// Absence or a blank value is a hard error, never silently ignored.
pub fn resolve_api_key(variable: &str) -> Result<SecretString, ProviderError> {
    match std::env::var(variable) {
        Ok(value) if !value.trim().is_empty() => Ok(SecretString::new(value)),
        Ok(_) => Err(ProviderError::authentication(format!(
            "{variable} is set but empty"
        ))),
        Err(_) => Err(ProviderError::authentication(format!(
            "{variable} is not set"
        ))),
    }
}
