//! # Response Formatting
//!
//! Response envelope types for the member API.

use serde::Serialize;

use crate::store::Member;

/// Response for a successful member creation
#[derive(Debug, Clone, Serialize)]
pub struct CreateResponse {
    pub msg: String,
    pub member: Member,
}

impl CreateResponse {
    pub fn new(member: Member) -> Self {
        Self {
            msg: "New member successfully added".to_string(),
            member,
        }
    }
}

/// Response for a successful member deletion
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub done: bool,
    pub deleted_member: Member,
}

impl DeleteResponse {
    pub fn success(deleted_member: Member) -> Self {
        Self {
            done: true,
            deleted_member,
        }
    }
}

/// A single route entry in the sitemap
#[derive(Debug, Clone, Serialize)]
pub struct RouteInfo {
    pub method: String,
    pub path: String,
}

impl RouteInfo {
    pub fn new(method: &str, path: &str) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
        }
    }
}

/// Sitemap of available endpoints (diagnostic, served at `/`)
#[derive(Debug, Clone, Serialize)]
pub struct SitemapResponse {
    pub family: String,
    pub endpoints: Vec<RouteInfo>,
}

impl SitemapResponse {
    pub fn new(family: impl Into<String>, endpoints: Vec<RouteInfo>) -> Self {
        Self {
            family: family.into(),
            endpoints,
        }
    }
}
