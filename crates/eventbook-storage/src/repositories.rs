// Repository layer for database operations
//
// All durable state lives here; the services above are stateless.
// Email uniqueness is enforced by a unique index on users(LOWER(email)),
// not by the advisory pre-check in the auth service.

use anyhow::Result;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::*;

const USER_COLUMNS: &str = "id, email, password_hash, first_name, last_name, role, phone_number, location, verified, created_at, updated_at";
const EVENT_COLUMNS: &str = "id, title, description, vendor_id, category, location, venue, event_date, start_time, end_time, ticket_price, max_attendees, current_attendees, image_url, status, created_at, updated_at";

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create database connection from URL
    pub async fn from_url(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Run pending migrations
    pub async fn migrate(&self) -> Result<()> {
        tracing::debug!("running database migrations");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Connectivity probe for health checks
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    // ============================================
    // Users
    // ============================================

    pub async fn create_user(&self, input: CreateUser) -> Result<UserRow> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            INSERT INTO users (id, email, password_hash, first_name, last_name, role, phone_number, location, verified, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, FALSE, $9, $9)
            RETURNING {USER_COLUMNS}
            "#,
        ))
        .bind(Uuid::now_v7())
        .bind(&input.email)
        .bind(&input.password_hash)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.role)
        .bind(&input.phone_number)
        .bind(&input.location)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_user(&self, id: Uuid) -> Result<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE id = $1
            "#,
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE LOWER(email) = LOWER($1)
            "#,
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM users WHERE LOWER(email) = LOWER($1))")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists.0)
    }

    // ============================================
    // Events
    // ============================================

    pub async fn create_event(&self, input: CreateEvent) -> Result<EventRow> {
        // One timestamp for both columns: a fresh event has created_at == updated_at
        let now = Utc::now();
        let row = sqlx::query_as::<_, EventRow>(&format!(
            r#"
            INSERT INTO events (id, title, description, vendor_id, category, location, venue, event_date, start_time, end_time, ticket_price, max_attendees, current_attendees, image_url, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, 0, $13, 'PENDING', $14, $14)
            RETURNING {EVENT_COLUMNS}
            "#,
        ))
        .bind(Uuid::now_v7())
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.vendor_id)
        .bind(&input.category)
        .bind(&input.location)
        .bind(&input.venue)
        .bind(input.event_date)
        .bind(input.start_time)
        .bind(input.end_time)
        .bind(input.ticket_price)
        .bind(input.max_attendees)
        .bind(&input.image_url)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_event(&self, id: Uuid) -> Result<Option<EventRow>> {
        let row = sqlx::query_as::<_, EventRow>(&format!(
            r#"
            SELECT {EVENT_COLUMNS}
            FROM events
            WHERE id = $1
            "#,
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn update_event(&self, id: Uuid, input: UpdateEvent) -> Result<Option<EventRow>> {
        let row = sqlx::query_as::<_, EventRow>(&format!(
            r#"
            UPDATE events
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                category = COALESCE($4, category),
                location = COALESCE($5, location),
                venue = COALESCE($6, venue),
                event_date = COALESCE($7, event_date),
                start_time = COALESCE($8, start_time),
                end_time = COALESCE($9, end_time),
                ticket_price = COALESCE($10, ticket_price),
                max_attendees = COALESCE($11, max_attendees),
                image_url = COALESCE($12, image_url),
                status = COALESCE($13, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {EVENT_COLUMNS}
            "#,
        ))
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.category)
        .bind(&input.location)
        .bind(&input.venue)
        .bind(input.event_date)
        .bind(input.start_time)
        .bind(input.end_time)
        .bind(input.ticket_price)
        .bind(input.max_attendees)
        .bind(&input.image_url)
        .bind(&input.status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Idempotent removal: deleting an absent id is not an error
    pub async fn delete_event(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn list_events_by_status(&self, status: &str) -> Result<Vec<EventRow>> {
        let rows = sqlx::query_as::<_, EventRow>(&format!(
            r#"
            SELECT {EVENT_COLUMNS}
            FROM events
            WHERE status = $1
            ORDER BY created_at DESC
            "#,
        ))
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Vendor view: every status, so pending work stays visible to its owner
    pub async fn list_events_by_vendor(&self, vendor_id: Uuid) -> Result<Vec<EventRow>> {
        let rows = sqlx::query_as::<_, EventRow>(&format!(
            r#"
            SELECT {EVENT_COLUMNS}
            FROM events
            WHERE vendor_id = $1
            ORDER BY created_at DESC
            "#,
        ))
        .bind(vendor_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Case-insensitive substring match over title OR description.
    /// When `status` is given the filter is applied in the query itself.
    pub async fn search_events(&self, query: &str, status: Option<&str>) -> Result<Vec<EventRow>> {
        let pattern = format!("%{query}%");
        let rows = sqlx::query_as::<_, EventRow>(&format!(
            r#"
            SELECT {EVENT_COLUMNS}
            FROM events
            WHERE (title ILIKE $1 OR description ILIKE $1)
              AND ($2::text IS NULL OR status = $2)
            ORDER BY created_at DESC
            "#,
        ))
        .bind(&pattern)
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn list_events_by_location(
        &self,
        location: &str,
        status: Option<&str>,
    ) -> Result<Vec<EventRow>> {
        let pattern = format!("%{location}%");
        let rows = sqlx::query_as::<_, EventRow>(&format!(
            r#"
            SELECT {EVENT_COLUMNS}
            FROM events
            WHERE location ILIKE $1
              AND ($2::text IS NULL OR status = $2)
            ORDER BY created_at DESC
            "#,
        ))
        .bind(&pattern)
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

/// True when the error chain bottoms out in a Postgres unique-constraint
/// violation. Used to translate a lost registration race into the same
/// "email already in use" answer as the pre-check.
pub fn is_unique_violation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .is_some_and(|db| db.is_unique_violation())
}
