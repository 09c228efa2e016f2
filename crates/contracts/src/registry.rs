use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Value of the `@type` discriminant for organisations
pub const ORG_TYPE_TAG: &str = "Org";
/// Value of the `@type` discriminant for people
pub const USER_TYPE_TAG: &str = "User";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityType {
    User,
    Org,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EqFilter {
    pub eq: String,
}

/// Generic registry lookup: `{entityType: [...], filters: {field: {eq: value}}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrySearchRequest {
    pub entity_type: Vec<EntityType>,
    pub filters: BTreeMap<String, EqFilter>,
}

impl RegistrySearchRequest {
    /// Exact-match search on a single field
    pub fn exact(entity: EntityType, field: &str, value: &str) -> Self {
        let mut filters = BTreeMap::new();
        filters.insert(
            field.to_string(),
            EqFilter {
                eq: value.to_string(),
            },
        );
        Self {
            entity_type: vec![entity],
            filters,
        }
    }

    pub fn user_by_id(user_id: &str) -> Self {
        Self::exact(EntityType::User, "userId", user_id)
    }

    pub fn org_by_osid(osid: &str) -> Self {
        Self::exact(EntityType::Org, "osid", osid)
    }
}

/// `result` of a registry search, entities grouped by type
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrySearchResult {
    #[serde(rename = "User", default)]
    pub users: Vec<Contributor>,
    #[serde(rename = "Org", default)]
    pub orgs: Vec<Contributor>,
}

impl RegistrySearchResult {
    pub fn entities(&self, entity: EntityType) -> &[Contributor] {
        match entity {
            EntityType::User => &self.users,
            EntityType::Org => &self.orgs,
        }
    }

    /// First entity of the requested type, if any
    pub fn into_first(self, entity: EntityType) -> Option<Contributor> {
        let list = match entity {
            EntityType::User => self.users,
            EntityType::Org => self.orgs,
        };
        list.into_iter().next()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PersonProfile {
    pub osid: Option<String>,
    pub user_id: Option<String>,
    pub first_name: String,
    pub last_name: Option<String>,
    /// Original `@type` tag, kept so the record round-trips
    pub type_tag: Option<String>,
    pub details: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrgProfile {
    pub osid: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub details: Map<String, Value>,
}

/// A registry contributor: a person or an organisation, discriminated by `@type`.
///
/// Anything not tagged `Org` is treated as a person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawContributor", into = "RawContributor")]
pub enum Contributor {
    Person(PersonProfile),
    Organization(OrgProfile),
}

impl Contributor {
    pub fn is_org(&self) -> bool {
        matches!(self, Contributor::Organization(_))
    }

    /// Display name: org name, or first name plus the last name when present
    pub fn full_name(&self) -> String {
        match self {
            Contributor::Organization(org) => org.name.clone(),
            Contributor::Person(person) => match person.last_name.as_deref() {
                Some(last) if !last.is_empty() => format!("{} {}", person.first_name, last),
                _ => person.first_name.clone(),
            },
        }
    }

    pub fn osid(&self) -> Option<&str> {
        match self {
            Contributor::Person(p) => p.osid.as_deref(),
            Contributor::Organization(o) => o.osid.as_deref(),
        }
    }

    /// Extra string attribute not modelled explicitly (email, phone, ...)
    pub fn detail(&self, key: &str) -> Option<&str> {
        let details = match self {
            Contributor::Person(p) => &p.details,
            Contributor::Organization(o) => &o.details,
        };
        details.get(key).and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawContributor {
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    type_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    osid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(flatten)]
    details: Map<String, Value>,
}

impl From<RawContributor> for Contributor {
    fn from(raw: RawContributor) -> Self {
        if raw.type_tag.as_deref() == Some(ORG_TYPE_TAG) {
            Contributor::Organization(OrgProfile {
                osid: raw.osid,
                name: raw.name.unwrap_or_default(),
                description: raw.description,
                details: raw.details,
            })
        } else {
            Contributor::Person(PersonProfile {
                osid: raw.osid,
                user_id: raw.user_id,
                first_name: raw.first_name.unwrap_or_default(),
                last_name: raw.last_name,
                type_tag: raw.type_tag,
                details: raw.details,
            })
        }
    }
}

impl From<Contributor> for RawContributor {
    fn from(contributor: Contributor) -> Self {
        match contributor {
            Contributor::Organization(org) => RawContributor {
                type_tag: Some(ORG_TYPE_TAG.to_string()),
                osid: org.osid,
                name: Some(org.name),
                description: org.description,
                details: org.details,
                ..Default::default()
            },
            Contributor::Person(person) => RawContributor {
                type_tag: Some(person.type_tag.unwrap_or_else(|| USER_TYPE_TAG.to_string())),
                osid: person.osid,
                user_id: person.user_id,
                first_name: Some(person.first_name),
                last_name: person.last_name,
                details: person.details,
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_request_shape() {
        let req = serde_json::to_value(RegistrySearchRequest::org_by_osid("org-1")).unwrap();
        assert_eq!(
            req,
            json!({"entityType": ["Org"], "filters": {"osid": {"eq": "org-1"}}})
        );
        let req = serde_json::to_value(RegistrySearchRequest::user_by_id("u-7")).unwrap();
        assert_eq!(
            req,
            json!({"entityType": ["User"], "filters": {"userId": {"eq": "u-7"}}})
        );
    }

    #[test]
    fn test_org_contributor() {
        let c: Contributor = serde_json::from_value(json!({
            "@type": "Org",
            "osid": "1-abc",
            "name": "Open School",
            "type": ["contribute"]
        }))
        .unwrap();
        assert!(c.is_org());
        assert_eq!(c.full_name(), "Open School");
        assert_eq!(c.osid(), Some("1-abc"));
    }

    #[test]
    fn test_person_full_name() {
        let first_only: Contributor = serde_json::from_value(json!({
            "@type": "User",
            "firstName": "Asha",
            "lastName": ""
        }))
        .unwrap();
        assert!(!first_only.is_org());
        assert_eq!(first_only.full_name(), "Asha");

        let both: Contributor = serde_json::from_value(json!({
            "@type": "User",
            "firstName": "Asha",
            "lastName": "Rao",
            "email": "asha@example.org"
        }))
        .unwrap();
        assert_eq!(both.full_name(), "Asha Rao");
        assert_eq!(both.detail("email"), Some("asha@example.org"));
    }

    #[test]
    fn test_untagged_record_is_person() {
        let c: Contributor = serde_json::from_value(json!({"firstName": "Ravi"})).unwrap();
        assert!(matches!(c, Contributor::Person(_)));
        assert_eq!(c.full_name(), "Ravi");
    }

    #[test]
    fn test_search_result_grouping() {
        let result: RegistrySearchResult = serde_json::from_value(json!({
            "User": [{"@type": "User", "firstName": "A"}, {"@type": "User", "firstName": "B"}]
        }))
        .unwrap();
        assert_eq!(result.entities(EntityType::User).len(), 2);
        assert!(result.entities(EntityType::Org).is_empty());
        let first = result.into_first(EntityType::User).unwrap();
        assert_eq!(first.full_name(), "A");
    }

    #[test]
    fn test_contributor_keeps_type_tag_on_serialize() {
        let c: Contributor =
            serde_json::from_value(json!({"@type": "Org", "name": "X", "code": "x1"})).unwrap();
        let back = serde_json::to_value(&c).unwrap();
        assert_eq!(back["@type"], "Org");
        assert_eq!(back["code"], "x1");
    }
}
