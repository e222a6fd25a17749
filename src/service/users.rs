use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

use crate::db::models::User;
use crate::db::repo::{StoreError, UserStore};
use crate::service::ids::generate_id;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("name and bio are required")]
    Validation,
    #[error("user not found")]
    NotFound,
    #[error(transparent)]
    Persistence(StoreError),
}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        error!("store error: {e:?}");
        ServiceError::Persistence(e)
    }
}

/// Trimmed `name` and `bio`, both guaranteed non-empty.
#[derive(Debug, PartialEq, Eq)]
struct Fields<'a> {
    name: &'a str,
    bio: &'a str,
}

fn validate<'a>(name: &'a str, bio: &'a str) -> Option<Fields<'a>> {
    let (name, bio) = (name.trim(), bio.trim());
    if name.is_empty() || bio.is_empty() {
        None
    } else {
        Some(Fields { name, bio })
    }
}

/// Validation and persistence mapping for the user resource.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub async fn create_user(&self, name: &str, bio: &str) -> Result<User, ServiceError> {
        let fields = validate(name, bio).ok_or(ServiceError::Validation)?;
        let user = User {
            id: generate_id(),
            name: fields.name.to_string(),
            bio: fields.bio.to_string(),
        };

        let stored = self.store.insert(&user).await?;
        info!(id = %stored.id, "user created");
        Ok(stored)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ServiceError> {
        Ok(self.store.find_all().await?)
    }

    pub async fn get_user(&self, id: &str) -> Result<User, ServiceError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound)
    }

    /// Deletes in one store operation; a missing id is `NotFound`.
    pub async fn delete_user(&self, id: &str) -> Result<User, ServiceError> {
        let deleted = self
            .store
            .find_and_delete(id)
            .await?
            .ok_or(ServiceError::NotFound)?;
        info!(id = %deleted.id, "user deleted");
        Ok(deleted)
    }

    /// Full replacement of `name` and `bio`. A missing id is reported before
    /// invalid fields, and invalid fields are never written.
    pub async fn update_user(&self, id: &str, name: &str, bio: &str) -> Result<User, ServiceError> {
        let Some(fields) = validate(name, bio) else {
            return match self.store.find_by_id(id).await? {
                Some(_) => Err(ServiceError::Validation),
                None => Err(ServiceError::NotFound),
            };
        };

        let updated = self
            .store
            .find_and_replace(id, fields.name, fields.bio)
            .await?
            .ok_or(ServiceError::NotFound)?;
        info!(id = %updated.id, "user updated");
        Ok(updated)
    }
}
