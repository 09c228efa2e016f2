use contracts::announcement::{Announcement, AnnouncementListResult};

use crate::shared::api_utils::ApiError;
use crate::shared::messages::{Localizer, MessageKey};
use crate::shared::notifications::Notifier;

/// Announcements sent by the current user
#[derive(Clone, Debug)]
pub struct OutboxState {
    pub announcements: Vec<Announcement>,
    pub show_loader: bool,
    pub show_error: bool,
}

impl Default for OutboxState {
    fn default() -> Self {
        Self {
            announcements: Vec::new(),
            show_loader: true,
            show_error: false,
        }
    }
}

impl OutboxState {
    pub fn apply_list(
        &mut self,
        result: Result<AnnouncementListResult, ApiError>,
        notifier: &dyn Notifier,
        localizer: &dyn Localizer,
    ) {
        self.show_loader = false;
        match result {
            Ok(list) => {
                self.announcements = list.announcements;
                self.show_error = false;
            }
            Err(e) => {
                log::error!("Outbox announcements failed: {}", e);
                self.show_error = true;
                notifier.error(&e.user_message(&localizer.text(MessageKey::OutboxFetchFailed)));
            }
        }
    }

    pub fn apply_cancel(
        &mut self,
        announcement_id: &str,
        result: Result<(), ApiError>,
        notifier: &dyn Notifier,
        localizer: &dyn Localizer,
    ) {
        match result {
            Ok(()) => {
                self.announcements
                    .retain(|a| a.announcement_id != announcement_id);
                notifier.success(&localizer.text(MessageKey::AnnouncementCancelled));
            }
            Err(e) => {
                log::error!("Cancelling announcement {} failed: {}", announcement_id, e);
                notifier.error(&localizer.text(MessageKey::AnnouncementCancelFailed));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::announcement::service::inbox_announcement_stub;
    use crate::shared::messages::ResourceBundle;
    use crate::shared::notifications::testing::RecordingNotifier;
    use crate::shared::notifications::ToastLevel;

    fn loaded() -> OutboxState {
        let mut list = inbox_announcement_stub().result;
        for (i, a) in list.announcements.iter_mut().enumerate() {
            a.announcement_id = format!("a-{}", i + 1);
        }
        let mut state = OutboxState::default();
        state.apply_list(
            Ok(list),
            &RecordingNotifier::default(),
            &ResourceBundle::embedded(),
        );
        state
    }

    #[test]
    fn test_list_loaded() {
        let state = loaded();
        assert_eq!(state.announcements.len(), 4);
        assert!(!state.show_loader);
        assert!(!state.show_error);
    }

    #[test]
    fn test_missing_session_shows_error() {
        let bundle = ResourceBundle::embedded();
        let notifier = RecordingNotifier::default();
        let mut state = OutboxState::default();
        state.apply_list(Err(ApiError::NotAuthenticated), &notifier, &bundle);
        assert!(state.show_error);
        assert!(!state.show_loader);
        assert_eq!(
            notifier.last(),
            Some((ToastLevel::Error, bundle.text(MessageKey::OutboxFetchFailed)))
        );
    }

    #[test]
    fn test_cancel_removes_announcement() {
        let notifier = RecordingNotifier::default();
        let mut state = loaded();
        let id = state.announcements[0].announcement_id.clone();

        state.apply_cancel(&id, Ok(()), &notifier, &ResourceBundle::embedded());

        assert_eq!(state.announcements.len(), 3);
        assert!(state.announcements.iter().all(|a| a.announcement_id != id));
        assert_eq!(notifier.levels(), vec![ToastLevel::Success]);
    }

    #[test]
    fn test_failed_cancel_keeps_announcement() {
        let notifier = RecordingNotifier::default();
        let mut state = loaded();
        let id = state.announcements[0].announcement_id.clone();

        state.apply_cancel(
            &id,
            Err(ApiError::Transport("offline".to_string())),
            &notifier,
            &ResourceBundle::embedded(),
        );

        assert_eq!(state.announcements.len(), 4);
        assert_eq!(notifier.levels(), vec![ToastLevel::Error]);
    }
}
