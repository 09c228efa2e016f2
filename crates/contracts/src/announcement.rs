use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub title: String,
    #[serde(rename = "downloadURL")]
    pub download_url: String,
    pub mimetype: String,
    #[serde(default)]
    pub filesize: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub announcement_id: String,
    pub source_id: String,
    pub created_by: String,
    pub created_on: NaiveDate,
    #[serde(default)]
    pub read_by: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub links: Vec<String>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub target: Vec<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnouncementListResult {
    #[serde(default)]
    pub announcements: Vec<Announcement>,
}

/// Body of the outbox call, wrapped in `ApiRequest`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboxRequest {
    pub user_id: String,
}

/// Payload of an announcement to be created
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnnouncementRequest {
    pub source_id: String,
    pub created_by: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub links: Vec<String>,
    #[serde(default)]
    pub target: Vec<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}
