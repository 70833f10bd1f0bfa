//! Profile repository for database operations
//!
//! Every read selects an explicit projection; `password_hash` is only
//! ever fetched by the credential lookup that backs signin. `stacks`
//! and `links` are stored as JSON text blobs and (de)serialized at the
//! service layer.

use sqlx::PgPool;

/// Minimal projection used by list and search
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SummaryRow {
    pub id: String,
    pub firstname: String,
    pub middlename: Option<String>,
    pub lastname: Option<String>,
}

/// Full profile projection (sans password) used by get-by-id
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProfileRow {
    pub id: String,
    pub username: String,
    pub firstname: String,
    pub middlename: Option<String>,
    pub lastname: Option<String>,
    pub bio: Option<String>,
    pub stacks: Option<String>,
    pub links: Option<String>,
}

/// Credential projection used by signin only
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CredentialRow {
    pub id: String,
    pub username: String,
    pub password_hash: String,
}

/// Input for inserting a new profile
///
/// `stacks` and `links` arrive already serialized to their storage text.
#[derive(Debug, Clone)]
pub struct NewDev {
    pub id: String,
    pub username: String,
    pub firstname: String,
    pub middlename: Option<String>,
    pub lastname: Option<String>,
    pub password_hash: String,
    pub bio: Option<String>,
    pub stacks: Option<String>,
    pub links: Option<String>,
}

/// Partial update input; absent fields keep their stored value
#[derive(Debug, Clone, Default)]
pub struct DevChanges {
    pub username: Option<String>,
    pub firstname: Option<String>,
    pub middlename: Option<String>,
    pub lastname: Option<String>,
    pub bio: Option<String>,
    pub stacks: Option<String>,
    pub links: Option<String>,
    pub password_hash: Option<String>,
}

/// Profile repository
pub struct DevRepository;

impl DevRepository {
    /// List all profiles, minimal projection, in creation order (ULIDs sort
    /// lexicographically by creation time)
    pub async fn list(pool: &PgPool) -> Result<Vec<SummaryRow>, sqlx::Error> {
        sqlx::query_as::<_, SummaryRow>(
            r#"
            SELECT id, firstname, middlename, lastname
            FROM devs
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await
    }

    /// Case-insensitive substring search over the name columns
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<SummaryRow>, sqlx::Error> {
        let pattern = format!("%{}%", term);
        sqlx::query_as::<_, SummaryRow>(
            r#"
            SELECT id, firstname, middlename, lastname
            FROM devs
            WHERE username ILIKE $1
               OR firstname ILIKE $1
               OR middlename ILIKE $1
               OR lastname ILIKE $1
            ORDER BY id
            "#,
        )
        .bind(pattern)
        .fetch_all(pool)
        .await
    }

    /// Fetch one full profile by id
    pub async fn find_profile_by_id(
        pool: &PgPool,
        id: &str,
    ) -> Result<Option<ProfileRow>, sqlx::Error> {
        sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT id, username, firstname, middlename, lastname, bio, stacks, links
            FROM devs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Fetch the credential projection for signin
    pub async fn find_credentials_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<CredentialRow>, sqlx::Error> {
        sqlx::query_as::<_, CredentialRow>(
            r#"
            SELECT id, username, password_hash
            FROM devs
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await
    }

    /// Check if a username is taken
    pub async fn username_exists(pool: &PgPool, username: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM devs WHERE username = $1)
            "#,
        )
        .bind(username)
        .fetch_one(pool)
        .await
    }

    /// Insert a new profile
    ///
    /// The `devs.username` UNIQUE constraint is the authoritative
    /// uniqueness signal; a raced duplicate surfaces here as a
    /// unique-violation error (see [`is_unique_violation`]).
    pub async fn create(pool: &PgPool, new: NewDev) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO devs
                (id, username, firstname, middlename, lastname, password_hash, bio, stacks, links)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(new.id)
        .bind(new.username)
        .bind(new.firstname)
        .bind(new.middlename)
        .bind(new.lastname)
        .bind(new.password_hash)
        .bind(new.bio)
        .bind(new.stacks)
        .bind(new.links)
        .execute(pool)
        .await
        .map(|_| ())
    }

    /// Apply a partial update keyed by id; returns affected row count
    /// (0 when the id does not exist)
    pub async fn update(
        pool: &PgPool,
        id: &str,
        changes: DevChanges,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE devs SET
                username = COALESCE($2, username),
                firstname = COALESCE($3, firstname),
                middlename = COALESCE($4, middlename),
                lastname = COALESCE($5, lastname),
                bio = COALESCE($6, bio),
                stacks = COALESCE($7, stacks),
                links = COALESCE($8, links),
                password_hash = COALESCE($9, password_hash),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(changes.username)
        .bind(changes.firstname)
        .bind(changes.middlename)
        .bind(changes.lastname)
        .bind(changes.bio)
        .bind(changes.stacks)
        .bind(changes.links)
        .bind(changes.password_hash)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete a profile by id; returns affected row count
    pub async fn delete(pool: &PgPool, id: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM devs WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }
}

/// True when the error is a database unique-constraint violation
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}
