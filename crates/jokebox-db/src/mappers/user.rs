//! User entity <-> model mapper

use jokebox_core::entities::User;
use jokebox_core::value_objects::UserId;
use uuid::Uuid;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::from_uuid(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Values bound when inserting a user
pub struct UserInsert<'a> {
    pub id: Uuid,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
}

impl<'a> UserInsert<'a> {
    pub fn new(user: &'a User, password_hash: &'a str) -> Self {
        Self {
            id: user.id.into_inner(),
            first_name: &user.first_name,
            last_name: &user.last_name,
            email: &user.email,
            password_hash,
        }
    }
}
