//! Localized user-facing messages
//!
//! Messages are looked up by a typed key in a resource bundle. A key missing
//! from the bundle falls back to the built-in English text.

use once_cell::sync::Lazy;
use std::collections::HashMap;

const EMBEDDED_BUNDLE: &str = include_str!("en.json");

static DEFAULT_BUNDLE: Lazy<ResourceBundle> = Lazy::new(|| {
    ResourceBundle::from_json(EMBEDDED_BUNDLE).unwrap_or_else(|e| {
        log::error!("Embedded message bundle is invalid: {}", e);
        ResourceBundle::default()
    })
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageKey {
    ProfileNotFound,
    ProfileFetchFailed,
    MissingUserDetails,
    MissingContributorId,
    OrgNotFound,
    OrgFetchFailed,
    LoadingLimitedPublished,
    NoResultTitle,
    NoResultText,
    DeletingContent,
    LimitedPublishedFetchFailed,
    DeleteSucceeded,
    DeleteFailed,
    ShareLinkCopied,
    ShareLinkFailed,
    OutboxFetchFailed,
    AnnouncementCancelled,
    AnnouncementCancelFailed,
}

impl MessageKey {
    pub const ALL: [MessageKey; 18] = [
        MessageKey::ProfileNotFound,
        MessageKey::ProfileFetchFailed,
        MessageKey::MissingUserDetails,
        MessageKey::MissingContributorId,
        MessageKey::OrgNotFound,
        MessageKey::OrgFetchFailed,
        MessageKey::LoadingLimitedPublished,
        MessageKey::NoResultTitle,
        MessageKey::NoResultText,
        MessageKey::DeletingContent,
        MessageKey::LimitedPublishedFetchFailed,
        MessageKey::DeleteSucceeded,
        MessageKey::DeleteFailed,
        MessageKey::ShareLinkCopied,
        MessageKey::ShareLinkFailed,
        MessageKey::OutboxFetchFailed,
        MessageKey::AnnouncementCancelled,
        MessageKey::AnnouncementCancelFailed,
    ];

    pub fn key(self) -> &'static str {
        match self {
            MessageKey::ProfileNotFound => "emsg.profile.m0001",
            MessageKey::ProfileFetchFailed => "emsg.profile.m0002",
            MessageKey::MissingUserDetails => "emsg.profile.m0003",
            MessageKey::MissingContributorId => "emsg.profile.m0004",
            MessageKey::OrgNotFound => "emsg.contributorjoin.m0001",
            MessageKey::OrgFetchFailed => "fmsg.contributorjoin.m0001",
            MessageKey::LoadingLimitedPublished => "stmsg.m0082",
            MessageKey::NoResultTitle => "stmsg.m0008",
            MessageKey::NoResultText => "stmsg.m0083",
            MessageKey::DeletingContent => "stmsg.m0034",
            MessageKey::LimitedPublishedFetchFailed => "fmsg.m0064",
            MessageKey::DeleteSucceeded => "smsg.m0006",
            MessageKey::DeleteFailed => "fmsg.m0022",
            MessageKey::ShareLinkCopied => "smsg.m0041",
            MessageKey::ShareLinkFailed => "emsg.m0044",
            MessageKey::OutboxFetchFailed => "fmsg.announcement.m0001",
            MessageKey::AnnouncementCancelled => "smsg.announcement.m0001",
            MessageKey::AnnouncementCancelFailed => "fmsg.announcement.m0002",
        }
    }

    fn fallback(self) -> &'static str {
        match self {
            MessageKey::ProfileNotFound => "Could not find the user profile",
            MessageKey::ProfileFetchFailed => "Fetching user profile failed",
            MessageKey::MissingUserDetails => "Please provide userDetails",
            MessageKey::MissingContributorId => "Please provide either of userId or orgId",
            MessageKey::OrgNotFound => "No organisation found",
            MessageKey::OrgFetchFailed => "Fetching organisation details failed",
            MessageKey::LoadingLimitedPublished => "Loading...",
            MessageKey::NoResultTitle => "No content found",
            MessageKey::NoResultText => "Nothing to show here yet",
            MessageKey::DeletingContent => "Deleting...",
            MessageKey::LimitedPublishedFetchFailed => "Fetching content failed",
            MessageKey::DeleteSucceeded => "Content deleted",
            MessageKey::DeleteFailed => "Could not delete the content",
            MessageKey::ShareLinkCopied => "Link copied",
            MessageKey::ShareLinkFailed => "Could not copy the link",
            MessageKey::OutboxFetchFailed => "Fetching sent announcements failed",
            MessageKey::AnnouncementCancelled => "Announcement cancelled",
            MessageKey::AnnouncementCancelFailed => "Could not cancel the announcement",
        }
    }
}

/// Source of localized text
pub trait Localizer {
    fn text(&self, key: MessageKey) -> String;
}

#[derive(Clone, Debug, Default)]
pub struct ResourceBundle {
    entries: HashMap<String, String>,
}

impl ResourceBundle {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let entries: HashMap<String, String> = serde_json::from_str(raw)?;
        Ok(Self { entries })
    }

    /// Bundle shipped with the application
    pub fn embedded() -> Self {
        DEFAULT_BUNDLE.clone()
    }
}

impl Localizer for ResourceBundle {
    fn text(&self, key: MessageKey) -> String {
        self.entries
            .get(key.key())
            .cloned()
            .unwrap_or_else(|| key.fallback().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_bundle_covers_every_key() {
        let bundle = ResourceBundle::embedded();
        for key in MessageKey::ALL {
            assert!(bundle.entries.contains_key(key.key()), "missing {}", key.key());
        }
        assert_eq!(bundle.entries.len(), MessageKey::ALL.len());
        assert_eq!(
            bundle.text(MessageKey::MissingContributorId),
            "Please provide either of userId or orgId"
        );
    }

    #[test]
    fn test_missing_key_falls_back() {
        let bundle = ResourceBundle::from_json(r#"{"smsg.m0006": "Removed"}"#).unwrap();
        assert_eq!(bundle.text(MessageKey::DeleteSucceeded), "Removed");
        assert_eq!(bundle.text(MessageKey::DeleteFailed), "Could not delete the content");
    }
}
