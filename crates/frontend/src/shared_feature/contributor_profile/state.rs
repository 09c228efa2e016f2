use contracts::registry::{Contributor, EntityType, RegistrySearchRequest, RegistrySearchResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;

use crate::shared::api_utils::ApiError;
use crate::shared::messages::{Localizer, MessageKey};
use crate::shared::notifications::Notifier;

const SOURCING_SEGMENT: &str = "/sourcing";

pub fn is_sourcing_route(path: &str) -> bool {
    path.contains(SOURCING_SEGMENT)
}

/// What the parent hands to the popup
#[derive(Clone, Debug, Default)]
pub struct ProfileInputs {
    pub user_id: Option<String>,
    pub org_id: Option<String>,
    pub user_details: Option<Contributor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProfileInputError {
    #[error("user details are required outside the sourcing area")]
    MissingUserDetails,
    #[error("either a user id or an org id is required")]
    MissingContributorId,
}

impl ProfileInputError {
    pub fn message_key(self) -> MessageKey {
        match self {
            ProfileInputError::MissingUserDetails => MessageKey::MissingUserDetails,
            ProfileInputError::MissingContributorId => MessageKey::MissingContributorId,
        }
    }
}

/// A registry lookup the popup needs to issue
#[derive(Clone, Debug)]
pub struct ProfileFetch {
    pub entity: EntityType,
    pub request: RegistrySearchRequest,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LoadPlan {
    /// Profile supplied by the parent, no request
    Supplied(Contributor),
    FetchOrg(String),
    FetchUser(String),
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl LoadPlan {
    /// Outside the sourcing area the parent must supply the profile; inside it
    /// the profile is looked up by org id (preferred) or user id.
    pub fn resolve(route_path: &str, inputs: &ProfileInputs) -> Result<Self, ProfileInputError> {
        if !is_sourcing_route(route_path) {
            return inputs
                .user_details
                .clone()
                .map(LoadPlan::Supplied)
                .ok_or(ProfileInputError::MissingUserDetails);
        }

        if let Some(org_id) = non_empty(&inputs.org_id) {
            return Ok(LoadPlan::FetchOrg(org_id.to_string()));
        }
        if let Some(user_id) = non_empty(&inputs.user_id) {
            return Ok(LoadPlan::FetchUser(user_id.to_string()));
        }
        Err(ProfileInputError::MissingContributorId)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    /// The registry answered with no matching entity
    NotFound,
    Failed,
    /// Required inputs were missing; nothing was requested
    Aborted,
}

#[derive(Clone, Debug)]
pub struct ContributorProfileState {
    pub contributor: Option<Contributor>,
    pub full_name: String,
    pub is_org: bool,
    pub show_org_data: bool,
    pub load_state: LoadState,
    /// Message shown in place of the profile when it could not be loaded
    pub notice: Option<MessageKey>,
}

impl ContributorProfileState {
    pub fn new(show_org_data: Option<bool>) -> Self {
        Self {
            contributor: None,
            full_name: String::new(),
            is_org: false,
            show_org_data: show_org_data.unwrap_or(true),
            load_state: LoadState::Loading,
            notice: None,
        }
    }

    pub fn show_loader(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    /// Decide how to load the profile. Returns the lookup to issue, if any.
    pub fn start(
        &mut self,
        route_path: &str,
        inputs: &ProfileInputs,
        notifier: &dyn Notifier,
        localizer: &dyn Localizer,
    ) -> Option<ProfileFetch> {
        match LoadPlan::resolve(route_path, inputs) {
            Ok(LoadPlan::Supplied(contributor)) => {
                self.set_contributor(contributor);
                None
            }
            Ok(LoadPlan::FetchOrg(osid)) => Some(ProfileFetch {
                entity: EntityType::Org,
                request: RegistrySearchRequest::org_by_osid(&osid),
            }),
            Ok(LoadPlan::FetchUser(user_id)) => Some(ProfileFetch {
                entity: EntityType::User,
                request: RegistrySearchRequest::user_by_id(&user_id),
            }),
            Err(e) => {
                log::warn!("Contributor profile not loaded: {}", e);
                self.load_state = LoadState::Aborted;
                self.notice = Some(e.message_key());
                notifier.error(&localizer.text(e.message_key()));
                None
            }
        }
    }

    pub fn set_contributor(&mut self, contributor: Contributor) {
        self.is_org = contributor.is_org();
        self.full_name = contributor.full_name();
        self.contributor = Some(contributor);
        self.load_state = LoadState::Loaded;
        self.notice = None;
    }

    pub fn apply_search(
        &mut self,
        entity: EntityType,
        result: Result<RegistrySearchResult, ApiError>,
        notifier: &dyn Notifier,
        localizer: &dyn Localizer,
    ) {
        let (not_found, failed) = match entity {
            EntityType::User => (MessageKey::ProfileNotFound, MessageKey::ProfileFetchFailed),
            EntityType::Org => (MessageKey::OrgNotFound, MessageKey::OrgFetchFailed),
        };

        match result {
            Ok(found) => match found.into_first(entity) {
                Some(contributor) => self.set_contributor(contributor),
                None => {
                    log::warn!("Registry search returned no {:?}", entity);
                    self.load_state = LoadState::NotFound;
                    self.notice = Some(not_found);
                    notifier.warning(&localizer.text(not_found));
                }
            },
            Err(e) => {
                log::error!("Registry search for {:?} failed: {}", entity, e);
                self.load_state = LoadState::Failed;
                self.notice = Some(failed);
                notifier.warning(&e.user_message(&localizer.text(failed)));
            }
        }
    }
}

/// Ensures the parent hears about the popup closing once, whether it was
/// closed explicitly or torn down.
#[derive(Clone, Debug, Default)]
pub struct CloseGuard(Arc<AtomicBool>);

impl CloseGuard {
    /// True only for the first call
    pub fn fire(&self) -> bool {
        !self.0.swap(true, Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::messages::ResourceBundle;
    use crate::shared::notifications::testing::RecordingNotifier;
    use crate::shared::notifications::ToastLevel;
    use contracts::registry::PersonProfile;
    use serde_json::json;

    const WORKSPACE_ROUTE: &str = "/workspace/content/create";
    const SOURCING_ROUTE: &str = "/sourcing/contributor/user/u-1";

    fn person(first: &str, last: Option<&str>) -> Contributor {
        Contributor::Person(PersonProfile {
            first_name: first.to_string(),
            last_name: last.map(str::to_string),
            ..Default::default()
        })
    }

    fn users(result: serde_json::Value) -> RegistrySearchResult {
        serde_json::from_value(result).unwrap()
    }

    #[test]
    fn test_supplied_details_need_no_request() {
        let notifier = RecordingNotifier::default();
        let bundle = ResourceBundle::embedded();
        let mut state = ContributorProfileState::new(None);
        let inputs = ProfileInputs {
            user_details: Some(person("Asha", None)),
            ..Default::default()
        };

        let fetch = state.start(WORKSPACE_ROUTE, &inputs, &notifier, &bundle);

        assert!(fetch.is_none());
        assert_eq!(state.full_name, "Asha");
        assert!(!state.show_loader());
        assert!(state.show_org_data);
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_supplied_details_join_last_name() {
        let mut state = ContributorProfileState::new(Some(false));
        state.set_contributor(person("Asha", Some("Rao")));
        assert_eq!(state.full_name, "Asha Rao");
        assert!(!state.is_org);
        assert!(!state.show_org_data);

        state.set_contributor(person("Asha", Some("")));
        assert_eq!(state.full_name, "Asha");
    }

    #[test]
    fn test_missing_details_outside_sourcing_aborts() {
        let notifier = RecordingNotifier::default();
        let bundle = ResourceBundle::embedded();
        let mut state = ContributorProfileState::new(None);
        let inputs = ProfileInputs {
            user_id: Some("u-1".to_string()),
            ..Default::default()
        };

        assert!(state
            .start(WORKSPACE_ROUTE, &inputs, &notifier, &bundle)
            .is_none());
        assert_eq!(state.load_state, LoadState::Aborted);
        assert_eq!(state.notice, Some(MessageKey::MissingUserDetails));
        assert_eq!(notifier.levels(), vec![ToastLevel::Error]);
    }

    #[test]
    fn test_sourcing_without_ids_aborts() {
        let notifier = RecordingNotifier::default();
        let bundle = ResourceBundle::embedded();
        let mut state = ContributorProfileState::new(None);
        let inputs = ProfileInputs {
            user_id: Some(String::new()),
            org_id: None,
            user_details: None,
        };

        assert!(state
            .start(SOURCING_ROUTE, &inputs, &notifier, &bundle)
            .is_none());
        assert_eq!(state.notice, Some(MessageKey::MissingContributorId));
        assert_eq!(
            notifier.last(),
            Some((
                ToastLevel::Error,
                "Please provide either of userId or orgId".to_string()
            ))
        );
    }

    #[test]
    fn test_org_id_takes_precedence() {
        let inputs = ProfileInputs {
            user_id: Some("u-1".to_string()),
            org_id: Some("o-1".to_string()),
            user_details: None,
        };
        assert_eq!(
            LoadPlan::resolve(SOURCING_ROUTE, &inputs),
            Ok(LoadPlan::FetchOrg("o-1".to_string()))
        );

        let notifier = RecordingNotifier::default();
        let mut state = ContributorProfileState::new(None);
        let fetch = state
            .start(SOURCING_ROUTE, &inputs, &notifier, &ResourceBundle::embedded())
            .unwrap();
        assert_eq!(fetch.entity, EntityType::Org);
        assert_eq!(fetch.request.filters["osid"].eq, "o-1");
        assert!(state.show_loader());
    }

    #[test]
    fn test_user_lookup_success() {
        let notifier = RecordingNotifier::default();
        let mut state = ContributorProfileState::new(None);
        state.apply_search(
            EntityType::User,
            Ok(users(json!({"User": [{"@type": "User", "firstName": "Ravi", "lastName": "K"}]}))),
            &notifier,
            &ResourceBundle::embedded(),
        );
        assert_eq!(state.full_name, "Ravi K");
        assert_eq!(state.load_state, LoadState::Loaded);
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_empty_registry_result_warns_and_leaves_contributor_unset() {
        let notifier = RecordingNotifier::default();
        let mut state = ContributorProfileState::new(None);
        state.apply_search(
            EntityType::Org,
            Ok(users(json!({"Org": []}))),
            &notifier,
            &ResourceBundle::embedded(),
        );
        assert!(state.contributor.is_none());
        assert_eq!(state.load_state, LoadState::NotFound);
        assert_eq!(state.notice, Some(MessageKey::OrgNotFound));
        assert_eq!(notifier.levels(), vec![ToastLevel::Warning]);
    }

    #[test]
    fn test_failure_prefers_server_message() {
        let bundle = ResourceBundle::embedded();
        let notifier = RecordingNotifier::default();
        let mut state = ContributorProfileState::new(None);
        state.apply_search(
            EntityType::User,
            Err(ApiError::Server {
                status: 500,
                message: Some("Registry unavailable".to_string()),
            }),
            &notifier,
            &bundle,
        );
        assert_eq!(
            notifier.last(),
            Some((ToastLevel::Warning, "Registry unavailable".to_string()))
        );
        assert_eq!(state.load_state, LoadState::Failed);
        assert_eq!(state.notice, Some(MessageKey::ProfileFetchFailed));
        assert!(!state.show_loader());

        let notifier = RecordingNotifier::default();
        state.apply_search(
            EntityType::User,
            Err(ApiError::Transport("offline".to_string())),
            &notifier,
            &bundle,
        );
        assert_eq!(
            notifier.last(),
            Some((
                ToastLevel::Warning,
                bundle.text(MessageKey::ProfileFetchFailed)
            ))
        );
    }

    #[test]
    fn test_org_failure_and_missing_user_have_own_notices() {
        let notifier = RecordingNotifier::default();
        let mut state = ContributorProfileState::new(None);
        state.apply_search(
            EntityType::Org,
            Err(ApiError::Transport("offline".to_string())),
            &notifier,
            &ResourceBundle::embedded(),
        );
        assert_eq!(state.notice, Some(MessageKey::OrgFetchFailed));

        state.apply_search(
            EntityType::User,
            Ok(users(json!({"User": []}))),
            &notifier,
            &ResourceBundle::embedded(),
        );
        assert_eq!(state.load_state, LoadState::NotFound);
        assert_eq!(state.notice, Some(MessageKey::ProfileNotFound));

        state.set_contributor(person("Asha", None));
        assert_eq!(state.notice, None);
    }

    #[test]
    fn test_close_guard_fires_once() {
        let guard = CloseGuard::default();
        let teardown = guard.clone();
        assert!(guard.fire());
        assert!(!teardown.fire());
        assert!(!guard.fire());
    }
}
