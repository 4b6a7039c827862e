//! Current-user identity provider.
//!
//! Signed-in users are labelled by their email; everyone else is "You".
//! The hosting page's auth flow leaves the email in `localStorage` under
//! [`IDENTITY_STORAGE_KEY`].

use mindplus_core::ports::IdentityPort;

pub const ANONYMOUS_LABEL: &str = "You";
pub const IDENTITY_STORAGE_KEY: &str = "mindplus.identity.email";

#[derive(Debug, Default)]
pub struct SessionIdentity {
    email: Option<String>,
}

impl SessionIdentity {
    pub fn new(email: Option<String>) -> Self {
        Self {
            email: clean_email(email),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Falls back to anonymous when storage is unavailable.
    pub fn from_local_storage() -> Self {
        let email = local_storage().and_then(|s| s.get_item(IDENTITY_STORAGE_KEY).ok().flatten());
        Self::new(email)
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

impl IdentityPort for SessionIdentity {
    fn display_label(&self) -> String {
        self.email().unwrap_or(ANONYMOUS_LABEL).to_string()
    }
}

fn clean_email(email: Option<String>) -> Option<String> {
    email
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
