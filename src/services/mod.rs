//! Services Layer
//!
//! Business logic over the entity model. Every operation takes an
//! explicitly passed connection handle and runs as a self-contained unit
//! of work; composite writes go through a transaction so nothing is
//! observable unless the commit succeeds.

pub mod biblioteca_service;
pub mod catalog_service;
pub mod persona_service;
pub mod prestec_service;

use std::fmt;

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

/// Error type for service operations
#[derive(Debug)]
pub enum ServiceError {
    Database(String),
    NotFound,
    InvalidState(String),
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        ServiceError::Database(e.to_string())
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Database(msg) => write!(f, "database error: {}", msg),
            ServiceError::NotFound => write!(f, "not found"),
            ServiceError::InvalidState(msg) => write!(f, "invalid state: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

/// List every row of an entity.
pub async fn list_all<E: EntityTrait>(
    db: &DatabaseConnection,
) -> Result<Vec<E::Model>, ServiceError> {
    Ok(E::find().all(db).await?)
}
