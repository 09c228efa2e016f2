use contracts::content::{ContentItem, COLLECTION_MIME_TYPE};

const COURSE_CONTENT_TYPE: &str = "Course";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayType {
    Icon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionType {
    Delete,
    ShareComponent,
}

/// One clickable affordance on a content card
#[derive(Clone, Debug, PartialEq)]
pub struct ActionDescriptor {
    pub display_type: DisplayType,
    pub action_type: ActionType,
    pub classes: Option<&'static str>,
    pub icon: Option<&'static str>,
    pub mime_type: Option<String>,
    pub identifier: Option<String>,
    pub content_type: Option<String>,
    pub clickable: bool,
}

/// Share on the left, delete on the right
#[derive(Clone, Debug, PartialEq)]
pub struct ContentAction {
    pub left: ActionDescriptor,
    pub right: ActionDescriptor,
}

impl ContentAction {
    pub fn for_item(item: &ContentItem) -> Self {
        Self {
            right: ActionDescriptor {
                display_type: DisplayType::Icon,
                action_type: ActionType::Delete,
                classes: Some("trash large icon"),
                icon: Some("trash"),
                mime_type: None,
                identifier: None,
                content_type: None,
                clickable: true,
            },
            left: ActionDescriptor {
                display_type: DisplayType::Icon,
                action_type: ActionType::ShareComponent,
                classes: None,
                icon: Some("linkify"),
                mime_type: item.mime_type.clone(),
                identifier: Some(item.identifier.clone()),
                content_type: item.content_type.clone(),
                clickable: true,
            },
        }
    }
}

/// A content item ready for display; the action descriptor is always attached
#[derive(Clone, Debug, PartialEq)]
pub struct ListedContent {
    pub content: ContentItem,
    pub action: ContentAction,
}

impl ListedContent {
    pub fn new(content: ContentItem) -> Self {
        let action = ContentAction::for_item(&content);
        Self { content, action }
    }

    pub fn identifier(&self) -> &str {
        &self.content.identifier
    }
}

/// Link that opens unlisted content for anyone who has it
pub fn unlisted_share_url(origin: &str, item: &ContentItem) -> String {
    let id = urlencoding::encode(&item.identifier);
    if item.content_type.as_deref() == Some(COURSE_CONTENT_TYPE) {
        format!("{}/learn/course/{}/Unlisted", origin, id)
    } else if item.mime_type.as_deref() == Some(COLLECTION_MIME_TYPE) {
        format!("{}/resources/play/collection/{}/Unlisted", origin, id)
    } else {
        format!("{}/resources/play/content/{}/Unlisted", origin, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, mime: &str, content_type: &str) -> ContentItem {
        ContentItem {
            identifier: id.to_string(),
            mime_type: Some(mime.to_string()),
            content_type: Some(content_type.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_action_descriptor_carries_item_fields() {
        let listed = ListedContent::new(item("do_1", "application/pdf", "Resource"));
        let left = &listed.action.left;
        assert_eq!(left.action_type, ActionType::ShareComponent);
        assert_eq!(left.identifier.as_deref(), Some("do_1"));
        assert_eq!(left.mime_type.as_deref(), Some("application/pdf"));
        assert!(left.clickable);
        assert_eq!(listed.action.right.action_type, ActionType::Delete);
        assert_eq!(listed.action.right.classes, Some("trash large icon"));
    }

    #[test]
    fn test_share_urls() {
        let origin = "https://portal.example.org";
        assert_eq!(
            unlisted_share_url(origin, &item("do_1", "application/pdf", "Resource")),
            "https://portal.example.org/resources/play/content/do_1/Unlisted"
        );
        assert_eq!(
            unlisted_share_url(origin, &item("do_2", COLLECTION_MIME_TYPE, "TextBook")),
            "https://portal.example.org/resources/play/collection/do_2/Unlisted"
        );
        assert_eq!(
            unlisted_share_url(origin, &item("do_3", COLLECTION_MIME_TYPE, "Course")),
            "https://portal.example.org/learn/course/do_3/Unlisted"
        );
    }
}
