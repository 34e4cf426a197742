//! Catalog row types.
//!
//! Schools, grades, classes, and equipment items as served by the catalog
//! endpoints and embedded in cart entries.

use serde::{Deserialize, Serialize};

use super::id::{ClassId, EquipmentId, GradeId, SchoolId};

/// A school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct School {
    pub id: SchoolId,
    pub name: String,
}

/// A grade level within a school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    pub id: GradeId,
    pub name: String,
}

/// A class within a grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub id: ClassId,
    pub name: String,
}

/// A single line of an equipment list.
///
/// Value type: two items are interchangeable if all fields match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub id: EquipmentId,
    pub name: String,
    pub quantity: i64,
}

impl School {
    #[must_use]
    pub fn new(id: impl Into<SchoolId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Grade {
    #[must_use]
    pub fn new(id: impl Into<GradeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Class {
    #[must_use]
    pub fn new(id: impl Into<ClassId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl EquipmentItem {
    #[must_use]
    pub fn new(id: impl Into<EquipmentId>, name: impl Into<String>, quantity: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
        }
    }
}
