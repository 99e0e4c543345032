//! Cat DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::infrastructure::database::entities::cat;

/// Cat API representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatDto {
    pub id: i32,
    pub name: String,
    pub color: String,
    pub date_created: DateTime<Utc>,
}

impl From<cat::Model> for CatDto {
    fn from(m: cat::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            color: m.color,
            date_created: m.date_created,
        }
    }
}

/// Cat filter query parameters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CatFilter {
    /// Only cats with this exact color
    pub color: Option<String>,
}
