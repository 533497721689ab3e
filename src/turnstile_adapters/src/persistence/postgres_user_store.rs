use secrecy::{ExposeSecret, Secret};
use sqlx::{FromRow, Pool, Postgres, types::Json};
use turnstile_core::{
    Email, NewUser, PasswordHash, Profile, User, UserId, UserRepository, UserRepositoryError,
};

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: sqlx::PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresUserStore { pool }
    }
}

#[derive(FromRow)]
struct CustomerRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
    profile: Json<Profile>,
}

impl TryFrom<CustomerRow> for User {
    type Error = UserRepositoryError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        let email = Email::try_from(Secret::from(row.email))
            .map_err(|e| UserRepositoryError::UnexpectedError(e.to_string()))?;

        Ok(User::new(
            UserId::new(row.id),
            row.name,
            email,
            PasswordHash::new(Secret::from(row.password_hash)),
            row.profile.0,
        ))
    }
}

#[async_trait::async_trait]
impl UserRepository for PostgresUserStore {
    #[tracing::instrument(name = "Retrieving customer from PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserRepositoryError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
                SELECT id, name, email, password_hash, profile
                FROM customers
                WHERE email = $1
            "#,
        )
        .bind(email.as_ref().expose_secret())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserRepositoryError::UnexpectedError(e.to_string()))?;

        row.map(User::try_from).transpose()
    }

    #[tracing::instrument(name = "Adding customer to PostgreSQL", skip_all)]
    async fn create(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
                INSERT INTO customers (name, email, password_hash, profile)
                VALUES ($1, $2, $3, $4)
                RETURNING id, name, email, password_hash, profile
            "#,
        )
        .bind(&user.name)
        .bind(user.email.as_ref().expose_secret())
        .bind(user.password_hash.as_ref().expose_secret())
        .bind(Json(user.profile.clone()))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return UserRepositoryError::UserAlreadyExists;
                }
            }
            UserRepositoryError::UnexpectedError(e.to_string())
        })?;

        User::try_from(row)
    }
}
