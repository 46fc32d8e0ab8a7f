use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Ensures the four document collections exist.
/// Payloads are JSONB; there is no migration history to manage.
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    info!("Schema initialized");
    Ok(())
}

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS resume_uploads (
        resume_id        UUID PRIMARY KEY,
        filename         TEXT NOT NULL,
        raw_text_content TEXT NOT NULL,
        created_at       TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS parsed_resumes (
        id          UUID PRIMARY KEY,
        resume_id   UUID NOT NULL,
        parsed_data JSONB NOT NULL,
        created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS chat_transcripts (
        session_id   UUID PRIMARY KEY,
        created_at   TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        interactions JSONB NOT NULL DEFAULT '[]'::jsonb
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS submitted_profiles (
        id               UUID PRIMARY KEY,
        profile          JSONB NOT NULL,
        chat_session_id  UUID,
        resume_upload_id UUID,
        submitted_at     TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
];
