use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::user::{NewUser as DomainNewUser, User as DomainUser};

#[derive(Debug, Clone, Queryable)]
#[diesel(table_name = crate::schema::users)]
/// Diesel row for [`crate::domain::user::User`].
pub struct User {
    pub user_id: Uuid,
    pub tenant_id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: Option<String>,
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
/// Insertable form of [`User`]; `role` and `is_active` fall back to their
/// column defaults when unset.
pub struct NewUser<'a> {
    pub tenant_id: Uuid,
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub full_name: Option<&'a str>,
    pub role: Option<&'a str>,
    pub is_active: Option<bool>,
}

impl From<User> for DomainUser {
    fn from(row: User) -> Self {
        Self {
            user_id: row.user_id,
            tenant_id: row.tenant_id,
            username: row.username,
            email: row.email,
            password_hash: row.password_hash,
            full_name: row.full_name,
            role: row.role,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewUser> for NewUser<'a> {
    fn from(user: &'a DomainNewUser) -> Self {
        Self {
            tenant_id: user.tenant_id,
            username: user.username.as_str(),
            email: user.email.as_str(),
            password_hash: user.password_hash.as_str(),
            full_name: user.full_name.as_deref(),
            role: user.role.as_deref(),
            is_active: user.is_active,
        }
    }
}
