use std::sync::Arc;

use minijinja::Environment;

use config::Config;
use session::SessionStore;
use users::UserRepository;

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod templates;
pub mod users;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub users: Arc<UserRepository>,
    pub sessions: SessionStore,
    pub templates: Arc<Environment<'static>>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, bcrypt::BcryptError> {
        Ok(AppState {
            config,
            users: Arc::new(UserRepository::with_demo_users()?),
            sessions: SessionStore::default(),
            templates: Arc::new(templates::build()),
        })
    }
}
