// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    Email, NewUser, PasswordHash, PersonName, PhoneNumber, User, UserId, UserRepository,
    UserUpdate,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const USER_COLUMNS: &str = "id, role, first_name, last_name, email, phone_number, \
     house_holding_number, address, password_hash, is_active, created_at";

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    role: String,
    first_name: String,
    last_name: String,
    email: String,
    phone_number: String,
    house_holding_number: Option<String>,
    address: Option<String>,
    password_hash: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            role: row.role.parse()?,
            first_name: PersonName::new(row.first_name)?,
            last_name: PersonName::new(row.last_name)?,
            email: Email::new(row.email)?,
            phone_number: PhoneNumber::new(row.phone_number)?,
            house_holding_number: row.house_holding_number,
            address: row.address,
            password_hash: PasswordHash::new(row.password_hash)?,
            is_active: row.is_active,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            role,
            first_name,
            last_name,
            email,
            phone_number,
            house_holding_number,
            address,
            password_hash,
            is_active,
            created_at,
        } = new_user;

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (role, first_name, last_name, email, phone_number,
                 house_holding_number, address, password_hash, is_active, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(role.as_str())
        .bind(first_name.as_str())
        .bind(last_name.as_str())
        .bind(email.as_str())
        .bind(phone_number.as_str())
        .bind(house_holding_number)
        .bind(address)
        .bind(password_hash.as_str())
        .bind(is_active)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        if update.is_empty() {
            return Err(DomainError::Validation("no fields to update".into()));
        }
        let UserUpdate {
            id,
            first_name,
            last_name,
            phone_number,
            is_active,
        } = update;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE users SET ");
        {
            let mut fields = builder.separated(", ");
            if let Some(first_name) = first_name {
                fields.push("first_name = ");
                fields.push_bind_unseparated(String::from(first_name));
            }
            if let Some(last_name) = last_name {
                fields.push("last_name = ");
                fields.push_bind_unseparated(String::from(last_name));
            }
            if let Some(phone_number) = phone_number {
                fields.push("phone_number = ");
                fields.push_bind_unseparated(String::from(phone_number));
            }
            if let Some(is_active) = is_active {
                fields.push("is_active = ");
                fields.push_bind_unseparated(is_active);
            }
        }
        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(USER_COLUMNS);

        let row = builder
            .build_query_as::<UserRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        User::try_from(row)
    }
}
