use leptos::prelude::*;

use crate::shared::config::{load_config, AppConfig};
use crate::shared::messages::ResourceBundle;
use crate::shared::pagination::PaginationService;
use crate::system::session::BrowserSession;

/// Collaborators shared by every page, provided once at the root
#[derive(Clone)]
pub struct AppGlobalContext {
    pub config: AppConfig,
    pub messages: ResourceBundle,
    pub pagination: PaginationService,
    pub session: BrowserSession,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let config = load_config();
        Self {
            pagination: PaginationService::new(config.pagination.page_strip),
            messages: ResourceBundle::embedded(),
            session: BrowserSession,
            config,
        }
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
