//! Member HTTP Routes
//!
//! The five API endpoints, bound to the member store.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::Value;

use crate::observability::{Logger, Severity};
use crate::store::{FamilyStructure, Member};

use super::errors::{ApiError, ApiResult};
use super::response::{CreateResponse, DeleteResponse, RouteInfo, SitemapResponse};

/// Route table, single source of truth for the sitemap
const ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/members"),
    ("GET", "/member/:id"),
    ("POST", "/member"),
    ("DELETE", "/member/:id"),
];

/// Member state shared across handlers
///
/// The store is constructed by the caller and injected here; handlers
/// hold no state of their own.
#[derive(Debug)]
pub struct MemberState {
    pub family: Arc<FamilyStructure>,
}

impl MemberState {
    pub fn new(family: Arc<FamilyStructure>) -> Self {
        Self { family }
    }
}

/// Create member routes
pub fn member_routes(state: Arc<MemberState>) -> Router {
    Router::new()
        .route("/", get(sitemap_handler))
        .route("/members", get(list_members_handler))
        .route("/member/:id", get(get_member_handler))
        .route("/member", post(create_member_handler))
        .route("/member/:id", delete(delete_member_handler))
        .with_state(state)
}

/// Sitemap handler (diagnostic)
async fn sitemap_handler(State(state): State<Arc<MemberState>>) -> Json<SitemapResponse> {
    let endpoints = ROUTES
        .iter()
        .map(|(method, path)| RouteInfo::new(method, path))
        .collect();

    Json(SitemapResponse::new(state.family.last_name(), endpoints))
}

/// List all members handler
async fn list_members_handler(
    State(state): State<Arc<MemberState>>,
) -> ApiResult<Json<Vec<Member>>> {
    let members = state.family.list_all()?;
    Ok(Json(members))
}

/// Get single member handler
async fn get_member_handler(
    State(state): State<Arc<MemberState>>,
    Path(id): Path<u32>,
) -> ApiResult<Json<Member>> {
    let member = state
        .family
        .get(id)?
        .ok_or(ApiError::MemberNotFound(id))?;

    Ok(Json(member))
}

/// Create member handler
///
/// The body is validated as a full member object before the store is
/// touched; missing or mistyped fields come back as a 400.
async fn create_member_handler(
    State(state): State<Arc<MemberState>>,
    Json(body): Json<Value>,
) -> ApiResult<Json<CreateResponse>> {
    let member: Member =
        serde_json::from_value(body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;

    state.family.add(member.clone())?;

    let id = member.id.to_string();
    Logger::log(
        Severity::Info,
        "member_added",
        &[("id", id.as_str()), ("first_name", &member.first_name)],
    );

    Ok(Json(CreateResponse::new(member)))
}

/// Delete member handler
async fn delete_member_handler(
    State(state): State<Arc<MemberState>>,
    Path(id): Path<u32>,
) -> ApiResult<Json<DeleteResponse>> {
    let deleted = state
        .family
        .delete(id)?
        .ok_or(ApiError::MemberNotFound(id))?;

    let id = id.to_string();
    Logger::log(
        Severity::Info,
        "member_deleted",
        &[("id", id.as_str()), ("first_name", &deleted.first_name)],
    );

    Ok(Json(DeleteResponse::success(deleted)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_state() -> Arc<MemberState> {
        let family = Arc::new(FamilyStructure::new("Jackson"));
        Arc::new(MemberState::new(family))
    }

    #[test]
    fn test_router_builds() {
        let _router = member_routes(create_test_state());
    }

    #[test]
    fn test_route_table_covers_all_endpoints() {
        let methods: Vec<&str> = ROUTES.iter().map(|(m, _)| *m).collect();
        assert_eq!(methods, vec!["GET", "GET", "GET", "POST", "DELETE"]);
    }

    #[tokio::test]
    async fn test_sitemap_reports_family_and_routes() {
        let sitemap = sitemap_handler(State(create_test_state())).await;
        assert_eq!(sitemap.family, "Jackson");
        assert_eq!(sitemap.endpoints.len(), ROUTES.len());
    }
}
