use contracts::content::{ContentSearchRequest, ContentSearchResult};

use super::actions::ListedContent;
use crate::shared::api_utils::ApiError;
use crate::shared::config::AppConfig;
use crate::shared::messages::{Localizer, MessageKey};
use crate::shared::notifications::Notifier;
use crate::shared::pagination::{Pager, PaginationService};

/// Page number from the route; anything unparsable or below 1 means page 1
pub fn parse_page_param(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

#[derive(Clone, Debug)]
pub struct LimitedPublishedState {
    pub items: Vec<ListedContent>,
    pub total_count: u64,
    pub pager: Option<Pager>,
    pub page_number: u32,
    pub page_limit: u32,
    pub show_loader: bool,
    pub loader_message: MessageKey,
    pub no_result: bool,
    pub show_error: bool,
    /// Content awaiting delete confirmation
    pub pending_delete: Option<String>,
}

impl Default for LimitedPublishedState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            pager: None,
            page_number: 1,
            page_limit: 0,
            show_loader: true,
            loader_message: MessageKey::LoadingLimitedPublished,
            no_result: false,
            show_error: false,
            pending_delete: None,
        }
    }
}

impl LimitedPublishedState {
    /// Enter the loading state for `page` and build its search request.
    ///
    /// Returns `None` when there is no signed-in user; the error state is set.
    pub fn begin_fetch(
        &mut self,
        config: &AppConfig,
        user_id: Option<&str>,
        page: u32,
        notifier: &dyn Notifier,
        localizer: &dyn Localizer,
    ) -> Option<ContentSearchRequest> {
        self.show_loader = true;
        self.loader_message = MessageKey::LoadingLimitedPublished;
        self.page_number = page;
        self.page_limit = config.workspace.page_limit;

        let Some(user_id) = user_id.filter(|id| !id.is_empty()) else {
            self.fail_fetch(&ApiError::NotAuthenticated, notifier, localizer);
            return None;
        };

        Some(ContentSearchRequest::unlisted_by(
            user_id,
            &config.workspace.content_types,
            self.page_limit,
            self.page_number,
            &config.workspace.last_updated_on,
        ))
    }

    pub fn apply_search(
        &mut self,
        result: Result<ContentSearchResult, ApiError>,
        pagination: &PaginationService,
        notifier: &dyn Notifier,
        localizer: &dyn Localizer,
    ) {
        match result {
            Ok(found) if found.has_content() => {
                self.total_count = found.count;
                self.pager = Some(pagination.get_pager(found.count, self.page_number, self.page_limit));
                self.items = found.content.into_iter().map(ListedContent::new).collect();
                self.show_loader = false;
                self.no_result = false;
                self.show_error = false;
            }
            Ok(_) => {
                self.show_error = false;
                self.no_result = true;
                self.show_loader = false;
            }
            Err(e) => self.fail_fetch(&e, notifier, localizer),
        }
    }

    fn fail_fetch(&mut self, error: &ApiError, notifier: &dyn Notifier, localizer: &dyn Localizer) {
        log::error!("Limited published list for page {} failed: {}", self.page_number, error);
        self.show_loader = false;
        self.no_result = false;
        self.show_error = true;
        notifier.error(&localizer.text(MessageKey::LimitedPublishedFetchFailed));
    }

    /// Delete was clicked on a card; the confirmation dialog opens
    pub fn request_delete(&mut self, identifier: &str) {
        self.pending_delete = Some(identifier.to_string());
    }

    pub fn deny_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Confirmation approved: returns the identifier to delete
    pub fn approve_delete(&mut self) -> Option<String> {
        let identifier = self.pending_delete.take()?;
        self.show_loader = true;
        self.loader_message = MessageKey::DeletingContent;
        Some(identifier)
    }

    pub fn apply_delete(
        &mut self,
        identifier: &str,
        result: Result<(), ApiError>,
        notifier: &dyn Notifier,
        localizer: &dyn Localizer,
    ) {
        self.show_loader = false;
        match result {
            Ok(()) => {
                let before = self.items.len();
                self.items.retain(|item| item.identifier() != identifier);
                if self.items.len() < before {
                    self.total_count = self.total_count.saturating_sub(1);
                }
                if self.items.is_empty() {
                    self.no_result = true;
                }
                notifier.success(&localizer.text(MessageKey::DeleteSucceeded));
            }
            Err(e) => {
                log::error!("Deleting {} failed: {}", identifier, e);
                notifier.error(&localizer.text(MessageKey::DeleteFailed));
            }
        }
    }

    /// Route of `page`, or `None` when it lies outside `[1, total_pages]`.
    /// The current page is only updated for valid targets.
    pub fn navigate_to_page(&mut self, page: u32, config: &AppConfig) -> Option<String> {
        let in_range = self
            .pager
            .as_ref()
            .map(|pager| pager.contains_page(page))
            .unwrap_or(false);
        if !in_range {
            log::warn!("Ignoring navigation to page {}", page);
            return None;
        }
        self.page_number = page;
        Some(config.limited_publish_page_route(page))
    }
}
