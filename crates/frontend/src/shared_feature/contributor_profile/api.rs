use contracts::registry::{RegistrySearchRequest, RegistrySearchResult};
use contracts::shared::envelope::ApiRequest;
use gloo_net::http::Request;

use crate::shared::api_utils::{send_json, with_auth, ApiError};
use crate::shared::config::AppConfig;
use crate::system::session::SessionProvider;

/// Exact-match registry lookup
pub async fn search_registry(
    config: &AppConfig,
    session: &dyn SessionProvider,
    request: &RegistrySearchRequest,
) -> Result<RegistrySearchResult, ApiError> {
    let url = config.api_url(&config.api.registry_search);
    log::debug!("Registry search {:?} at {}", request.entity_type, url);
    let builder = with_auth(Request::post(&url), session);
    send_json(builder, &ApiRequest::new(request)).await
}
