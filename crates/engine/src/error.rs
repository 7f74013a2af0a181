//! Errors the engine can return.
//!
//! Every data-access fault surfaces as [`EngineError::Database`]; the
//! aggregations have no failure modes of their own beyond the store.

use sea_orm::DbErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Database(#[from] DbErr),
}
