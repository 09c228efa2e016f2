pub mod storage;

/// Accessor for the signed-in user
pub trait SessionProvider {
    fn user_id(&self) -> Option<String>;
    fn access_token(&self) -> Option<String>;
}

/// Session backed by browser localStorage
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

impl SessionProvider for BrowserSession {
    fn user_id(&self) -> Option<String> {
        storage::get_user_id()
    }

    fn access_token(&self) -> Option<String> {
        storage::get_access_token()
    }
}

/// Session with fixed values, for tests and previews
#[derive(Clone, Debug, Default)]
pub struct FixedSession {
    pub user_id: Option<String>,
    pub access_token: Option<String>,
}

impl FixedSession {
    pub fn user(user_id: &str) -> Self {
        Self {
            user_id: Some(user_id.to_string()),
            access_token: None,
        }
    }
}

impl SessionProvider for FixedSession {
    fn user_id(&self) -> Option<String> {
        self.user_id.clone()
    }

    fn access_token(&self) -> Option<String> {
        self.access_token.clone()
    }
}
