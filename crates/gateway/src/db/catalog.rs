//! Read-only catalog of schools, grades, classes, and equipment lists.
//!
//! Grades are shared by every school and classes by every grade. Equipment
//! lists are keyed by the `school-grade-class` combination, with a default
//! list for combinations that have no list of their own.

use std::collections::HashMap;

use schoolkit_core::{Class, ClassId, EquipmentItem, Grade, GradeId, School, SchoolId};

/// Immutable catalog tables.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    schools: Vec<School>,
    grades: Vec<Grade>,
    classes: Vec<Class>,
    equipment: HashMap<String, Vec<EquipmentItem>>,
    default_equipment: Vec<EquipmentItem>,
}

impl Catalog {
    /// Create a catalog from its tables.
    #[must_use]
    pub const fn new(
        schools: Vec<School>,
        grades: Vec<Grade>,
        classes: Vec<Class>,
        equipment: HashMap<String, Vec<EquipmentItem>>,
        default_equipment: Vec<EquipmentItem>,
    ) -> Self {
        Self {
            schools,
            grades,
            classes,
            equipment,
            default_equipment,
        }
    }

    /// All schools.
    #[must_use]
    pub fn schools(&self) -> &[School] {
        &self.schools
    }

    /// Grades offered by a school, or `None` if the school does not exist.
    #[must_use]
    pub fn grades_for_school(&self, school_id: &SchoolId) -> Option<&[Grade]> {
        self.has_school(school_id).then_some(self.grades.as_slice())
    }

    /// Classes in a grade, or `None` if the school does not exist.
    ///
    /// The grade is not validated: every school shares one class table.
    #[must_use]
    pub fn classes_for_grade(&self, school_id: &SchoolId, _grade_id: &GradeId) -> Option<&[Class]> {
        self.has_school(school_id).then_some(self.classes.as_slice())
    }

    /// Equipment list for a school/grade/class combination.
    ///
    /// Falls back to the default list when no specific list exists.
    #[must_use]
    pub fn equipment_list(
        &self,
        school_id: &SchoolId,
        grade_id: &GradeId,
        class_id: &ClassId,
    ) -> &[EquipmentItem] {
        self.equipment
            .get(&equipment_key(school_id, grade_id, class_id))
            .map_or(self.default_equipment.as_slice(), Vec::as_slice)
    }

    fn has_school(&self, school_id: &SchoolId) -> bool {
        self.schools.iter().any(|school| &school.id == school_id)
    }
}

/// Composite key for an equipment list.
#[must_use]
pub fn equipment_key(school_id: &SchoolId, grade_id: &GradeId, class_id: &ClassId) -> String {
    format!("{school_id}-{grade_id}-{class_id}")
}
