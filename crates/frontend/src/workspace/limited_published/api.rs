use contracts::content::{ContentRetireRequest, ContentSearchRequest, ContentSearchResult};
use contracts::shared::envelope::ApiRequest;
use gloo_net::http::Request;
use serde::de::IgnoredAny;

use crate::shared::api_utils::{send_json, with_auth, ApiError};
use crate::shared::config::AppConfig;
use crate::system::session::SessionProvider;

/// Search content owned by the current user
pub async fn search_content(
    config: &AppConfig,
    session: &dyn SessionProvider,
    request: &ContentSearchRequest,
) -> Result<ContentSearchResult, ApiError> {
    let url = config.api_url(&config.api.content_search);
    log::debug!("Content search page {} at {}", request.page_number, url);
    let builder = with_auth(Request::post(&url), session);
    send_json(builder, &ApiRequest::new(request)).await
}

/// Retire (delete) a single content item
pub async fn retire_content(
    config: &AppConfig,
    session: &dyn SessionProvider,
    identifier: &str,
) -> Result<(), ApiError> {
    let url = config.api_url(&config.api.content_retire);
    log::debug!("Retiring content {}", identifier);
    let builder = with_auth(Request::delete(&url), session);
    let _: IgnoredAny =
        send_json(builder, &ApiRequest::new(ContentRetireRequest::single(identifier))).await?;
    Ok(())
}
