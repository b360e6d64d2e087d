/// Server-side session record, correlated to one client through the opaque
/// token carried in the session cookie.
#[derive(Debug, Clone)]
pub struct Session {
    /// Present only while the session is authenticated.
    pub username: Option<String>,
    pub created_at: i64,
}

impl Session {
    pub fn authenticated(username: &str) -> Self {
        Session {
            username: Some(username.to_string()),
            created_at: chrono::Utc::now().timestamp(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.username.is_some()
    }
}
