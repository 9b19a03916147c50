use std::collections::HashSet;

use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::dto::competition::{CreateCompetitionRequest, UpdateCompetitionRequest};
use crate::error::{Result, StorageError};
use crate::models::{Competition, CubeType};
use crate::services::reconcile::reconcile;

const COMPETITION_COLUMNS: &str =
    "competition_id, name, slug, status, base_fee, cube_type_fee, guest_fee, created_at";

/// Repository for Competition database operations
pub struct CompetitionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CompetitionRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all competitions
    pub async fn list(&self) -> Result<Vec<Competition>> {
        let competitions = sqlx::query_as::<_, Competition>(&format!(
            "SELECT {COMPETITION_COLUMNS} FROM competitions ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(competitions)
    }

    /// Get a competition by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Competition> {
        let competition = sqlx::query_as::<_, Competition>(&format!(
            "SELECT {COMPETITION_COLUMNS} FROM competitions WHERE competition_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(competition)
    }

    /// Get a competition by slug
    pub async fn find_by_slug(&self, slug: &str) -> Result<Competition> {
        let competition = sqlx::query_as::<_, Competition>(&format!(
            "SELECT {COMPETITION_COLUMNS} FROM competitions WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(competition)
    }

    /// Create a new competition
    pub async fn create(&self, req: &CreateCompetitionRequest) -> Result<Competition> {
        let competition = sqlx::query_as::<_, Competition>(&format!(
            r#"
            INSERT INTO competitions (name, slug, status, base_fee, cube_type_fee, guest_fee)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COMPETITION_COLUMNS}
            "#
        ))
        .bind(&req.name)
        .bind(&req.slug)
        .bind(&req.status)
        .bind(req.base_fee)
        .bind(req.cube_type_fee)
        .bind(req.guest_fee)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let e = StorageError::from(e);
            if e.is_unique_violation() {
                StorageError::ConstraintViolation("Slug already exists".to_string())
            } else {
                e
            }
        })?;

        Ok(competition)
    }

    /// Update an existing competition, merging unset fields from the stored
    /// row.
    pub async fn update(
        &self,
        id: Uuid,
        existing: &Competition,
        req: &UpdateCompetitionRequest,
    ) -> Result<Competition> {
        let competition = sqlx::query_as::<_, Competition>(&format!(
            r#"
            UPDATE competitions
            SET name = $2, slug = $3, status = $4,
                base_fee = $5, cube_type_fee = $6, guest_fee = $7
            WHERE competition_id = $1
            RETURNING {COMPETITION_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(req.name.as_ref().unwrap_or(&existing.name))
        .bind(req.slug.as_ref().unwrap_or(&existing.slug))
        .bind(req.status.as_ref().unwrap_or(&existing.status))
        .bind(req.base_fee.unwrap_or(existing.base_fee))
        .bind(req.cube_type_fee.unwrap_or(existing.cube_type_fee))
        .bind(req.guest_fee.unwrap_or(existing.guest_fee))
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(competition)
    }

    /// Delete a competition by ID
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM competitions WHERE competition_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Cube types offered by a competition, in display order.
    pub async fn list_cube_types(&self, id: Uuid) -> Result<Vec<CubeType>> {
        let cube_types = sqlx::query_as::<_, CubeType>(
            r#"
            SELECT ct.cube_type_id, ct.name, ct.display_order
            FROM cube_types ct
            INNER JOIN competition_cube_types cct ON cct.cube_type_id = ct.cube_type_id
            WHERE cct.competition_id = $1
            ORDER BY ct.display_order, ct.name
            "#,
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(cube_types)
    }

    /// Reconciles the cube-type association rows against the desired set in
    /// one transaction.
    pub async fn set_cube_types(&self, id: Uuid, desired: &[Uuid]) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let current: Vec<Uuid> = sqlx::query_scalar(
            "SELECT cube_type_id FROM competition_cube_types WHERE competition_id = $1",
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

        let current: HashSet<Uuid> = current.into_iter().collect();
        let desired: HashSet<Uuid> = desired.iter().copied().collect();
        let diff = reconcile(&current, &desired);

        if diff.is_noop() {
            return Ok(());
        }

        if !diff.to_delete.is_empty() {
            sqlx::query(
                "DELETE FROM competition_cube_types
                 WHERE competition_id = $1 AND cube_type_id = ANY($2)",
            )
            .bind(id)
            .bind(&diff.to_delete)
            .execute(&mut *tx)
            .await?;
        }

        if !diff.to_insert.is_empty() {
            let mut builder =
                QueryBuilder::new("INSERT INTO competition_cube_types (competition_id, cube_type_id) ");
            builder.push_values(&diff.to_insert, |mut row, cube_type_id| {
                row.push_bind(id).push_bind(cube_type_id);
            });
            builder.build().execute(&mut *tx).await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
