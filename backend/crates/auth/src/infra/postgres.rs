//! PostgreSQL User Repository

use kernel::id::{RoleId, UserId};
use platform::password::HashedPassword;
use sqlx::PgPool;

use crate::domain::entity::user::{NewUser, Role, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, slug::Slug, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// Slug of the role granted to every new account
const DEFAULT_ROLE_SLUG: &str = "user";

/// Postgres unique-violation error code
const UNIQUE_VIOLATION: &str = "23505";

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
    slug: String,
    bio: Option<String>,
    image: Option<String>,
}

#[derive(sqlx::FromRow)]
struct RoleRow {
    id: i64,
    name: String,
    slug: String,
}

impl From<RoleRow> for Role {
    fn from(row: RoleRow) -> Self {
        Role {
            id: RoleId::from(row.id),
            name: row.name,
            slug: row.slug,
        }
    }
}

impl UserRow {
    fn into_user(self, roles: Vec<Role>) -> AuthResult<User> {
        let password_hash = HashedPassword::from_phc_string(self.password_hash)
            .map_err(|_| AuthError::Internal(format!("corrupt password hash for user {}", self.id)))?;

        Ok(User {
            id: UserId::from(self.id),
            name: UserName::from_db(self.name),
            email: Email::from_db(self.email),
            password_hash,
            slug: Slug::from_db(self.slug),
            bio: self.bio,
            image: self.image,
            roles,
        })
    }
}

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn roles_for(&self, user_id: i64) -> AuthResult<Vec<Role>> {
        let rows = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT r.id, r.name, r.slug
            FROM roles r
            INNER JOIN user_roles ur ON ur.role_id = r.id
            WHERE ur.user_id = $1
            ORDER BY r.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Role::from).collect())
    }
}

impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: NewUser) -> AuthResult<User> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (name, email, password_hash, slug)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password_hash, slug, bio, image
            "#,
        )
        .bind(new_user.name.as_str())
        .bind(new_user.email.as_str())
        .bind(new_user.password_hash.as_phc_string())
        .bind(new_user.slug.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err)
                if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) =>
            {
                AuthError::EmailTaken
            }
            _ => AuthError::Database(e),
        })?;

        let role = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT id, name, slug FROM roles WHERE slug = $1
            "#,
        )
        .bind(DEFAULT_ROLE_SLUG)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO user_roles (user_id, role_id) VALUES ($1, $2)
            "#,
        )
        .bind(row.id)
        .bind(role.id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        row.into_user(vec![role.into()])
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, password_hash, slug, bio, image
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let roles = self.roles_for(row.id).await?;
                Ok(Some(row.into_user(roles)?))
            }
            None => Ok(None),
        }
    }

    async fn set_image(&self, id: UserId, image_url: &str) -> AuthResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE users SET image = $2, last_update_date = now() WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .bind(image_url)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AuthError::UserNotFound);
        }

        Ok(())
    }
}
