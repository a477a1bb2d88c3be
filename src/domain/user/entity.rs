// src/domain/user/entity.rs
use crate::domain::user::value_objects::{
    Email, PasswordHash, PersonName, PhoneNumber, Role, UserId,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub role: Role,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: Email,
    pub phone_number: PhoneNumber,
    pub house_holding_number: Option<String>,
    pub address: Option<String>,
    pub password_hash: PasswordHash,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub role: Role,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: Email,
    pub phone_number: PhoneNumber,
    pub house_holding_number: Option<String>,
    pub address: Option<String>,
    pub password_hash: PasswordHash,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub first_name: Option<PersonName>,
    pub last_name: Option<PersonName>,
    pub phone_number: Option<PhoneNumber>,
    pub is_active: Option<bool>,
}

impl UserUpdate {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            first_name: None,
            last_name: None,
            phone_number: None,
            is_active: None,
        }
    }

    pub fn with_first_name(mut self, first_name: PersonName) -> Self {
        self.first_name = Some(first_name);
        self
    }

    pub fn with_last_name(mut self, last_name: PersonName) -> Self {
        self.last_name = Some(last_name);
        self
    }

    pub fn with_phone_number(mut self, phone_number: PhoneNumber) -> Self {
        self.phone_number = Some(phone_number);
        self
    }

    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.phone_number.is_none()
            && self.is_active.is_none()
    }
}
