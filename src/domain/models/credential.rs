/// Value object holding a freshly generated credential secret.
///
/// Read once when the sign-up request is built, never logged.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub fn new(secret: String) -> Self {
        Self(secret)
    }

    /// Get the secret as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
