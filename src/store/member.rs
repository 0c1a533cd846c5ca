//! Member record type
//!
//! A single family member. Ids are caller-supplied and unique within a
//! collection (enforced by `FamilyStructure`, not by this type).

use serde::{Deserialize, Serialize};

/// A family member record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Caller-supplied identifier, unique within the family
    pub id: u32,

    /// Given name
    pub first_name: String,

    /// Age in years
    pub age: u32,

    /// Lucky numbers, order as supplied
    pub lucky_numbers: Vec<i64>,
}

impl Member {
    pub fn new(id: u32, first_name: impl Into<String>, age: u32, lucky_numbers: Vec<i64>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            age,
            lucky_numbers,
        }
    }
}
