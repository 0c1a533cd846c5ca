//! # Member Store Module
//!
//! In-memory record store for family member data. Owns the member
//! collection and provides access by identifier.

pub mod errors;
pub mod family;
pub mod member;

pub use errors::{StoreError, StoreResult};
pub use family::FamilyStructure;
pub use member::Member;
