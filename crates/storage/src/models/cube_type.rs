use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A puzzle event. `name` doubles as the scrambler puzzle key
/// (`333`, `222`, `pyram`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CubeType {
    pub cube_type_id: Uuid,
    pub name: String,
    pub display_order: i32,
}
