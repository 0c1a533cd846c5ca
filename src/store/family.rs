//! Family member collection
//!
//! Ordered in-memory collection of members behind an `RwLock`. Lookups
//! scan in insertion order; deletes preserve the relative order of the
//! surviving records.

use std::sync::RwLock;

use super::errors::{StoreError, StoreResult};
use super::member::Member;

/// An in-memory family: a display surname plus an ordered member list.
///
/// Member ids are unique within the collection; `add` and
/// `with_members` reject duplicates. Absence is reported as `None`
/// rather than an error so callers decide the not-found policy.
pub struct FamilyStructure {
    last_name: String,
    members: RwLock<Vec<Member>>,
}

impl FamilyStructure {
    /// Create an empty family with the given surname
    pub fn new(last_name: impl Into<String>) -> Self {
        Self {
            last_name: last_name.into(),
            members: RwLock::new(Vec::new()),
        }
    }

    /// Create a family pre-populated with the given members
    pub fn with_members(last_name: impl Into<String>, members: Vec<Member>) -> StoreResult<Self> {
        let family = Self::new(last_name);
        for member in members {
            family.add(member)?;
        }
        Ok(family)
    }

    /// The family surname
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Snapshot of the full ordered collection
    pub fn list_all(&self) -> StoreResult<Vec<Member>> {
        let members = self.members.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(members.clone())
    }

    /// First member whose id matches, scanning in insertion order
    pub fn get(&self, id: u32) -> StoreResult<Option<Member>> {
        let members = self.members.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(members.iter().find(|m| m.id == id).cloned())
    }

    /// Append a member and return the full updated collection
    pub fn add(&self, member: Member) -> StoreResult<Vec<Member>> {
        let mut members = self.members.write().map_err(|_| StoreError::LockPoisoned)?;

        if members.iter().any(|m| m.id == member.id) {
            return Err(StoreError::DuplicateId(member.id));
        }

        members.push(member);
        Ok(members.clone())
    }

    /// Remove and return the first member whose id matches
    pub fn delete(&self, id: u32) -> StoreResult<Option<Member>> {
        let mut members = self.members.write().map_err(|_| StoreError::LockPoisoned)?;

        match members.iter().position(|m| m.id == id) {
            Some(idx) => Ok(Some(members.remove(idx))),
            None => Ok(None),
        }
    }

    /// Number of members in the collection
    pub fn len(&self) -> StoreResult<usize> {
        let members = self.members.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(members.len())
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl std::fmt::Debug for FamilyStructure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FamilyStructure")
            .field("last_name", &self.last_name)
            .finish_non_exhaustive()
    }
}
