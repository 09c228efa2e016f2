use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Publish state of restricted-visibility content
pub const STATUS_UNLISTED: &str = "Unlisted";
pub const OBJECT_TYPE_CONTENT: &str = "Content";
pub const COLLECTION_MIME_TYPE: &str = "application/vnd.ekstep.content-collection";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSearchFilters {
    pub status: Vec<String>,
    pub created_by: String,
    pub content_type: Vec<String>,
    pub object_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSearchParams {
    pub last_updated_on: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSearchRequest {
    pub filters: ContentSearchFilters,
    pub limit: u32,
    pub page_number: u32,
    pub params: ContentSearchParams,
}

impl ContentSearchRequest {
    /// Unlisted content owned by `created_by`, one page of `limit` items
    pub fn unlisted_by(
        created_by: &str,
        content_types: &[String],
        limit: u32,
        page_number: u32,
        last_updated_on: &str,
    ) -> Self {
        Self {
            filters: ContentSearchFilters {
                status: vec![STATUS_UNLISTED.to_string()],
                created_by: created_by.to_string(),
                content_type: content_types.to_vec(),
                object_type: OBJECT_TYPE_CONTENT.to_string(),
            },
            limit,
            page_number,
            params: ContentSearchParams {
                last_updated_on: last_updated_on.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub identifier: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub app_icon: Option<String>,
    #[serde(default)]
    pub last_updated_on: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentSearchResult {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub content: Vec<ContentItem>,
}

impl ContentSearchResult {
    /// A zero count or an empty page both mean "nothing to show"
    pub fn has_content(&self) -> bool {
        self.count > 0 && !self.content.is_empty()
    }
}

/// Body of the content retire (delete) call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRetireRequest {
    pub content_ids: Vec<String>,
}

impl ContentRetireRequest {
    pub fn single(identifier: &str) -> Self {
        Self {
            content_ids: vec![identifier.to_string()],
        }
    }
}
