use std::sync::Arc;

use log::{debug, error};

use super::auth_traits::{AuthServiceTrait, SessionStoreTrait};
use crate::constants::LOGGED_IN_USER_KEY;
use crate::errors::{Result, ValidationError};
use crate::notifications::{NotificationKind, NotificationServiceTrait};

/// Service for the login and signup forms.
pub struct AuthService {
    session_store: Arc<dyn SessionStoreTrait>,
    notifications: Arc<dyn NotificationServiceTrait>,
}

impl AuthService {
    pub fn new(
        session_store: Arc<dyn SessionStoreTrait>,
        notifications: Arc<dyn NotificationServiceTrait>,
    ) -> Self {
        AuthService {
            session_store,
            notifications,
        }
    }

    fn missing(&self, field: &str) -> crate::errors::Error {
        let message = format!("Please enter your {}", field);
        error!("Form rejected: {}", message);
        self.notifications.notify(&message, NotificationKind::Error);
        ValidationError::MissingField(field.to_string()).into()
    }
}

impl AuthServiceTrait for AuthService {
    fn login(&self, email: &str, _password: &str) -> Result<()> {
        let email = email.trim();
        if email.is_empty() {
            return Err(self.missing("email"));
        }

        // Remember the display name; there is nothing to authenticate
        // against.
        self.session_store.set(LOGGED_IN_USER_KEY, email);
        debug!("Logged in as {}", email);
        self.notifications
            .notify("Welcome back!", NotificationKind::Success);
        Ok(())
    }

    fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<()> {
        if name.trim().is_empty() {
            return Err(self.missing("name"));
        }
        if email.trim().is_empty() {
            return Err(self.missing("email"));
        }
        if password.is_empty() {
            return Err(self.missing("password"));
        }
        if password != confirm_password {
            let message = "Passwords do not match";
            error!("Form rejected: {}", message);
            self.notifications.notify(message, NotificationKind::Error);
            return Err(ValidationError::InvalidInput(message.to_string()).into());
        }

        self.notifications
            .notify("Account created, you can log in now", NotificationKind::Success);
        Ok(())
    }

    fn display_name(&self) -> Option<String> {
        self.session_store.get(LOGGED_IN_USER_KEY)
    }
}
