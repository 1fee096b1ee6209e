use sqlx::PgPool;
use storage::{
    dto::user::RegisterRequest,
    error::Result,
    models::{ROLE_ADMINISTRATOR, ROLE_MEMBER, USER_STATUS_ACTIVE, USER_STATUS_PENDING, User},
    repository::user::{NewUser, UserRepository},
    services::handicap::{self, RecomputeOutcome},
};
use uuid::Uuid;

use crate::config::Config;

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>> {
    let repo = UserRepository::new(pool);
    repo.find_by_email(email).await
}

pub async fn find_by_id(pool: &PgPool, user_id: Uuid) -> Result<User> {
    let repo = UserRepository::new(pool);
    repo.find_by_id(user_id).await
}

/// Create a pending member with the configured starting handicap.
pub async fn register(
    pool: &PgPool,
    req: &RegisterRequest,
    password_hash: &str,
    default_handicap: i32,
) -> Result<User> {
    let repo = UserRepository::new(pool);
    repo.create(&NewUser {
        first_name: &req.first_name,
        last_name: &req.last_name,
        email: &req.email,
        password_hash,
        role: ROLE_MEMBER,
        status: USER_STATUS_PENDING,
        handicap: default_handicap,
    })
    .await
}

pub async fn list_pending(pool: &PgPool) -> Result<Vec<User>> {
    let repo = UserRepository::new(pool);
    repo.list_pending().await
}

pub async fn approve(pool: &PgPool, user_id: Uuid, approved_by: &str) -> Result<User> {
    let repo = UserRepository::new(pool);
    repo.approve(user_id, approved_by).await
}

pub async fn deny(pool: &PgPool, user_id: Uuid) -> Result<()> {
    let repo = UserRepository::new(pool);
    repo.delete(user_id).await
}

/// Standalone handicap recomputation, independent of any score mutation.
pub async fn recompute_handicap(pool: &PgPool, user_id: Uuid) -> Result<RecomputeOutcome> {
    handicap::recompute_for_user(pool, user_id).await
}

/// Seed the administrator account at startup when it does not exist yet.
pub async fn ensure_admin(pool: &PgPool, config: &Config) -> anyhow::Result<()> {
    let repo = UserRepository::new(pool);

    if repo.find_by_email(&config.admin_email).await?.is_some() {
        tracing::debug!("admin account already present");
        return Ok(());
    }

    let password_hash = bcrypt::hash(&config.admin_password, bcrypt::DEFAULT_COST)?;

    repo.create(&NewUser {
        first_name: &config.admin_first_name,
        last_name: &config.admin_last_name,
        email: &config.admin_email,
        password_hash: &password_hash,
        role: ROLE_ADMINISTRATOR,
        status: USER_STATUS_ACTIVE,
        handicap: config.default_handicap,
    })
    .await?;

    tracing::info!(email = %config.admin_email, "admin account created");

    Ok(())
}
