//! Cart entry type.

use serde::{Deserialize, Serialize};

use super::catalog::{Class, EquipmentItem, Grade, School};
use super::id::CartEntryId;

/// A saved equipment selection for one school/grade/class combination.
///
/// A user's cart is an ordered list of these entries. The list is always
/// replaced wholesale; entries are never merged or patched individually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub id: CartEntryId,
    /// Unix timestamp (seconds) supplied by the client when the entry was saved.
    pub timestamp: i64,
    pub school: School,
    pub grade: Grade,
    /// Absent when the selection was made at grade level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<Class>,
    #[serde(default)]
    pub items: Vec<EquipmentItem>,
}
