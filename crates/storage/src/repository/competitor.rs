use std::collections::HashSet;

use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::dto::competitor::RegisterCompetitorRequest;
use crate::error::{Result, StorageError};
use crate::models::{Competitor, CompetitorStatus, User};
use crate::services::reconcile::reconcile;

const COMPETITOR_COLUMNS: &str = "competitor_id, competition_id, user_id, status, guest_count, \
                                  verified_at, province_id, district_id, created_at";

/// Repository for Competitor database operations
pub struct CompetitorRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CompetitorRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Registers a user to a competition. The user's province and district
    /// are copied onto the registration, and the selected events are stored
    /// alongside. Registering the same user twice is a constraint violation.
    pub async fn register(
        &self,
        competition_id: Uuid,
        req: &RegisterCompetitorRequest,
    ) -> Result<Competitor> {
        let mut tx = self.pool.begin().await?;

        let user = sqlx::query_as::<_, User>(
            "SELECT user_id, name, gender, province_id, district_id, created_at
             FROM users WHERE user_id = $1",
        )
        .bind(req.user_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StorageError::NotFound)?;

        let competitor = sqlx::query_as::<_, Competitor>(&format!(
            r#"
            INSERT INTO competitors (competition_id, user_id, guest_count, province_id, district_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {COMPETITOR_COLUMNS}
            "#
        ))
        .bind(competition_id)
        .bind(user.user_id)
        .bind(req.guest_count)
        .bind(user.province_id)
        .bind(user.district_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            let e = StorageError::from(e);
            if e.is_unique_violation() {
                StorageError::ConstraintViolation("User is already registered".to_string())
            } else {
                e
            }
        })?;

        if !req.cube_type_ids.is_empty() {
            let mut builder =
                QueryBuilder::new("INSERT INTO competitor_cube_types (competitor_id, cube_type_id) ");
            builder.push_values(&req.cube_type_ids, |mut row, cube_type_id| {
                row.push_bind(competitor.competitor_id).push_bind(cube_type_id);
            });
            builder.build().execute(&mut *tx).await?;
        }

        tx.commit().await?;
        Ok(competitor)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Competitor> {
        let competitor = sqlx::query_as::<_, Competitor>(&format!(
            "SELECT {COMPETITOR_COLUMNS} FROM competitors WHERE competitor_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(competitor)
    }

    /// Registrations of a competition in registration order.
    pub async fn list_by_competition(&self, competition_id: Uuid) -> Result<Vec<Competitor>> {
        let competitors = sqlx::query_as::<_, Competitor>(&format!(
            r#"
            SELECT {COMPETITOR_COLUMNS} FROM competitors
            WHERE competition_id = $1
            ORDER BY created_at, competitor_id
            "#
        ))
        .bind(competition_id)
        .fetch_all(self.pool)
        .await?;

        Ok(competitors)
    }

    /// Admin verification: stamps `verified_at` and flips the status.
    pub async fn verify(&self, id: Uuid) -> Result<Competitor> {
        self.set_status(id, CompetitorStatus::Verified, true).await
    }

    /// Cancellation keeps the row; only the status changes.
    pub async fn cancel(&self, id: Uuid) -> Result<Competitor> {
        self.set_status(id, CompetitorStatus::Cancelled, false).await
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: CompetitorStatus,
        stamp_verified: bool,
    ) -> Result<Competitor> {
        let verified_clause = if stamp_verified {
            "verified_at = NOW()"
        } else {
            "verified_at = verified_at"
        };

        let competitor = sqlx::query_as::<_, Competitor>(&format!(
            r#"
            UPDATE competitors
            SET status = $2, {verified_clause}
            WHERE competitor_id = $1
            RETURNING {COMPETITOR_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(competitor)
    }

    pub async fn list_cube_type_ids(&self, id: Uuid) -> Result<Vec<Uuid>> {
        let ids = sqlx::query_scalar(
            "SELECT cube_type_id FROM competitor_cube_types WHERE competitor_id = $1",
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(ids)
    }

    /// Reconciles the competitor's selected events. Rows that stay keep
    /// their `is_paid` flag.
    pub async fn set_cube_types(&self, id: Uuid, desired: &[Uuid]) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let current: Vec<Uuid> = sqlx::query_scalar(
            "SELECT cube_type_id FROM competitor_cube_types WHERE competitor_id = $1",
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
                "DELETE FROM competitor_cube_types
                 WHERE competitor_id = $1 AND cube_type_id = ANY($2)",
            )
            .bind(id)
            .bind(&diff.to_delete)
            .execute(&mut *tx)
            .await?;
        }

        if !diff.to_insert.is_empty() {
            let mut builder =
                QueryBuilder::new("INSERT INTO competitor_cube_types (competitor_id, cube_type_id) ");
            builder.push_values(&diff.to_insert, |mut row, cube_type_id| {
                row.push_bind(id).push_bind(cube_type_id);
            });
            builder.build().execute(&mut *tx).await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
