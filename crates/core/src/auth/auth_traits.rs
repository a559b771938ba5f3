use crate::errors::Result;

/// Key-value store for the browser-session surface. The only key in
/// use today is `"loggedInUser"`.
pub trait SessionStoreTrait: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Trait for login/signup form handling. Validation only - there is no
/// authentication backend.
pub trait AuthServiceTrait: Send + Sync {
    /// Validates the login form and records the display name.
    fn login(&self, email: &str, password: &str) -> Result<()>;

    /// Validates the signup form. Does not create any account.
    fn signup(&self, name: &str, email: &str, password: &str, confirm_password: &str)
        -> Result<()>;

    /// Display name recorded by the last successful login, if any.
    fn display_name(&self) -> Option<String>;
}
