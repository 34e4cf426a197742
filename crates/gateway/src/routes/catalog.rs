//! Catalog route handlers.
//!
//! Read-only lookups over the seeded catalog tables.

use axum::extract::State;
use schoolkit_core::{Class, ClassId, EquipmentItem, Grade, GradeId, School, SchoolId};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{ApiJson, ApiQuery, missing_parameters, non_empty};
use crate::error::{AppError, Result};
use crate::state::AppState;

// =============================================================================
// Query Types
// =============================================================================

/// Query parameters for `/api/grades`.
#[derive(Debug, Deserialize)]
pub struct GradesQuery {
    pub school_id: Option<String>,
}

/// Query parameters for `/api/classes`.
#[derive(Debug, Deserialize)]
pub struct ClassesQuery {
    pub school_id: Option<String>,
    pub grade_id: Option<String>,
}

/// Query parameters for `/api/equipment`.
#[derive(Debug, Deserialize)]
pub struct EquipmentQuery {
    pub school_id: Option<String>,
    pub grade_id: Option<String>,
    pub class_id: Option<String>,
}

/// Equipment list response wrapper.
#[derive(Debug, Serialize)]
pub struct EquipmentList {
    pub items: Vec<EquipmentItem>,
}

// =============================================================================
// Handlers
// =============================================================================

/// List all schools.
#[instrument(skip_all)]
pub async fn schools(State(state): State<AppState>) -> ApiJson<Vec<School>> {
    ApiJson(state.catalog().schools().to_vec())
}

/// List the grades of a school.
#[instrument(skip(state))]
pub async fn grades(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<GradesQuery>,
) -> Result<ApiJson<Vec<Grade>>> {
    let school_id = non_empty(query.school_id)
        .map(SchoolId::new)
        .ok_or_else(|| missing_parameters(&[("school_id", true)]))?;

    state
        .catalog()
        .grades_for_school(&school_id)
        .map(|grades| ApiJson(grades.to_vec()))
        .ok_or_else(|| AppError::NotFound(format!("school {school_id}")))
}

/// List the classes of a grade.
#[instrument(skip(state))]
pub async fn classes(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ClassesQuery>,
) -> Result<ApiJson<Vec<Class>>> {
    let (school_id, grade_id) = match (non_empty(query.school_id), non_empty(query.grade_id)) {
        (Some(school), Some(grade)) => (SchoolId::new(school), GradeId::new(grade)),
        (school, grade) => {
            return Err(missing_parameters(&[
                ("school_id", school.is_none()),
                ("grade_id", grade.is_none()),
            ]));
        }
    };

    state
        .catalog()
        .classes_for_grade(&school_id, &grade_id)
        .map(|classes| ApiJson(classes.to_vec()))
        .ok_or_else(|| AppError::NotFound(format!("school {school_id}")))
}

/// Equipment list for a class.
///
/// Combinations without a list of their own get the default list.
#[instrument(skip(state))]
pub async fn equipment(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<EquipmentQuery>,
) -> Result<ApiJson<EquipmentList>> {
    let ids = (
        non_empty(query.school_id),
        non_empty(query.grade_id),
        non_empty(query.class_id),
    );
    let (school_id, grade_id, class_id) = match ids {
        (Some(school), Some(grade), Some(class)) => {
            (SchoolId::new(school), GradeId::new(grade), ClassId::new(class))
        }
        (school, grade, class) => {
            return Err(missing_parameters(&[
                ("school_id", school.is_none()),
                ("grade_id", grade.is_none()),
                ("class_id", class.is_none()),
            ]));
        }
    };

    let items = state
        .catalog()
        .equipment_list(&school_id, &grade_id, &class_id)
        .to_vec();
    Ok(ApiJson(EquipmentList { items }))
}
