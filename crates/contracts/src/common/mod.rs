//! Shared wire types for the admin API: entity lifecycle fields, list
//! pagination, query parameters and the error taxonomy used by every screen.

pub mod validation;

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed guard message for system-seeded records.
pub const DEFAULT_ENTITY_MESSAGE: &str = "Default records cannot be changed or deleted.";

/// Fixed message for mutations aimed at a record the backend no longer has.
pub const NOT_FOUND_MESSAGE: &str = "Record not found. Refresh the list and try again.";

/// Identifiers of the fixed icon set. Category and role icons must be
/// members of this list; the frontend renders the matching SVG.
pub const ICON_SET: &[&str] = &[
    "wrench", "hammer", "zap", "droplet", "paint-roller", "truck", "leaf", "shield", "home",
    "layers",
];

/// Visibility and usability flag shared by every manageable entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityStatus {
    Active,
    Inactive,
}

impl EntityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityStatus::Active => "ACTIVE",
            EntityStatus::Inactive => "INACTIVE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntityStatus::Active => "Active",
            EntityStatus::Inactive => "Inactive",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            EntityStatus::Active => EntityStatus::Inactive,
            EntityStatus::Inactive => EntityStatus::Active,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Lifecycle fields shared by every manageable aggregate.
///
/// Flattened into each aggregate on the wire, so the JSON shape stays the
/// plain `{id, uuid, name, ...}` record the API serves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityCore {
    pub id: i64,
    pub uuid: Uuid,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub is_default: bool,
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Reference to an associated sub-entity (trade's category, service's
/// trade, material's service).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: i64,
    pub name: String,
    pub status: EntityStatus,
}

/// Pagination metadata accompanying every list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl Pagination {
    pub fn empty(limit: u32) -> Self {
        Self {
            page: 1,
            limit,
            total: 0,
            total_pages: 1,
        }
    }

    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }

    /// Number of rows a well-behaved backend returns for `page` (1-based).
    pub fn expected_on_page(&self, page: u32) -> u64 {
        let limit = u64::from(self.limit);
        let served = limit.saturating_mul(u64::from(page.saturating_sub(1)));
        self.total.saturating_sub(served).min(limit)
    }

    /// Recompute `total_pages` after a local insert or removal.
    pub fn recalc(&mut self) {
        let limit = u64::from(self.limit.max(1));
        self.total_pages = (self.total.div_ceil(limit)).max(1) as u32;
        if self.page > self.total_pages {
            self.page = self.total_pages;
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::empty(20)
    }
}

/// Filter/sort parameters of the paginated list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub sort_order: SortOrder,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ListQuery {
    /// Key/value pairs in wire naming, ready for URL encoding.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
            ("sortOrder", self.sort_order.as_str().to_string()),
        ];
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(name) = self.name.as_deref() {
            let name = name.trim();
            if !name.is_empty() {
                pairs.push(("name", name.to_string()));
            }
        }
        pairs
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            sort_order: SortOrder::Asc,
            status: None,
            name: None,
        }
    }
}

/// Envelope of the paginated list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEnvelope<T> {
    pub status_code: u16,
    pub message: String,
    pub data: Vec<T>,
    pub pagination: Pagination,
}

/// Envelope of the single-entity endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemEnvelope<T> {
    pub status_code: u16,
    pub message: String,
    pub data: T,
}

/// Error envelope served by the API on failed mutations.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub status: String,
    pub message: String,
    #[serde(default)]
    pub errors: HashMap<String, Vec<String>>,
}

/// Body of the status-toggle endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusPayload {
    pub status: EntityStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Rejected input, caught client-side or returned with field errors.
    Validation,
    /// Mutation of a system-seeded record, short-circuited client-side.
    DefaultEntityLocked,
    /// Entity uuid unknown to the backend.
    NotFound,
    /// Transport failure before a response arrived.
    Network,
    /// Any other failed response.
    Server,
}

/// User-displayable error carried by every failed API call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
    pub field_errors: HashMap<String, Vec<String>>,
}

impl ApiError {
    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, Vec<String>>) -> Self {
        Self {
            kind: ApiErrorKind::Validation,
            message: message.into(),
            field_errors,
        }
    }

    pub fn default_entity_locked() -> Self {
        Self {
            kind: ApiErrorKind::DefaultEntityLocked,
            message: DEFAULT_ENTITY_MESSAGE.to_string(),
            field_errors: HashMap::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::NotFound,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Server,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trip() {
        let json = serde_json::to_string(&EntityStatus::Active).unwrap();
        assert_eq!(json, "\"ACTIVE\"");
        let back: EntityStatus = serde_json::from_str("\"INACTIVE\"").unwrap();
        assert_eq!(back, EntityStatus::Inactive);
        assert_eq!(EntityStatus::Inactive.toggled(), EntityStatus::Active);
    }

    #[test]
    fn pagination_expected_on_page() {
        let p = Pagination {
            page: 1,
            limit: 5,
            total: 12,
            total_pages: 3,
        };
        assert_eq!(p.expected_on_page(1), 5);
        assert_eq!(p.expected_on_page(2), 5);
        assert_eq!(p.expected_on_page(3), 2);
        assert_eq!(p.expected_on_page(4), 0);
    }

    #[test]
    fn pagination_recalc_clamps_page() {
        let mut p = Pagination {
            page: 3,
            limit: 5,
            total: 11,
            total_pages: 3,
        };
        p.total = 10;
        p.recalc();
        assert_eq!(p.total_pages, 2);
        assert_eq!(p.page, 2);

        p.total = 0;
        p.recalc();
        assert_eq!(p.total_pages, 1);
        assert_eq!(p.page, 1);
    }

    #[test]
    fn query_pairs_skip_blank_name() {
        let mut q = ListQuery::default();
        q.name = Some("   ".to_string());
        assert!(q.query_pairs().iter().all(|(k, _)| *k != "name"));

        q.name = Some(" boiler ".to_string());
        q.status = Some(EntityStatus::Active);
        let pairs = q.query_pairs();
        assert!(pairs.contains(&("name", "boiler".to_string())));
        assert!(pairs.contains(&("status", "ACTIVE".to_string())));
        assert!(pairs.contains(&("sortOrder", "ASC".to_string())));
    }

    #[test]
    fn list_envelope_wire_shape() {
        let json = r#"{
            "statusCode": 200,
            "message": "ok",
            "data": [],
            "pagination": {"page": 1, "limit": 20, "total": 0, "totalPages": 1}
        }"#;
        let env: ListEnvelope<EntityRef> = serde_json::from_str(json).unwrap();
        assert_eq!(env.pagination.total_pages, 1);
    }
}
