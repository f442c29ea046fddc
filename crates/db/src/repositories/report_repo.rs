//! Repository for abuse reports.

use sqlx::PgPool;
use streambox_core::types::DbId;

use crate::gateway::Procedure;
use crate::models::report::{CreateReport, Report};

const CREATE: Procedure = Procedure::new("sp_create_report", 4);
const GET_BY_ID: Procedure = Procedure::new("sp_get_report", 1);
const LIST_BY_USER: Procedure = Procedure::new("sp_get_user_reports", 1);
const LIST_ALL: Procedure = Procedure::new("sp_get_all_reports", 0);
const RESOLVE: Procedure = Procedure::new("sp_resolve_report", 1);

/// Provides the report procedure calls.
pub struct ReportRepo;

impl ReportRepo {
    /// File a report, returning its id.
    pub async fn create(pool: &PgPool, input: &CreateReport) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(&CREATE.scalar_sql())
            .bind(input.video_id)
            .bind(input.user_id)
            .bind(&input.reason)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Report>, sqlx::Error> {
        sqlx::query_as::<_, Report>(&GET_BY_ID.rows_sql())
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Reports filed by one user, newest first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Report>, sqlx::Error> {
        sqlx::query_as::<_, Report>(&LIST_BY_USER.rows_sql())
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    pub async fn list_all(pool: &PgPool) -> Result<Vec<Report>, sqlx::Error> {
        sqlx::query_as::<_, Report>(&LIST_ALL.rows_sql())
            .fetch_all(pool)
            .await
    }

    /// Mark a report `resuelto` and stamp `resolved_at`.
    pub async fn resolve(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let affected = sqlx::query_scalar::<_, i64>(&RESOLVE.scalar_sql())
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(affected > 0)
    }
}
