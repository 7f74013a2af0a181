//! Read-only analytics over the `transactions` store.
//!
//! The engine owns no state beyond an injected database connection and
//! exposes two aggregations: an overall fraud summary and a per-category
//! breakdown of fraudulent transactions.

use sea_orm::DatabaseConnection;

pub use analytics::{CATEGORY_CAP, CategoryBreakdown, CategoryGroup, Summary};
pub use error::EngineError;
pub use transactions::resolve_category;

mod analytics;
mod error;
pub mod transactions;
mod util;

type ResultEngine<T> = Result<T, EngineError>;

#[derive(Clone, Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// The connection is injected by the process bootstrap, which owns its
    /// lifecycle; the engine never opens, closes or retries it.
    pub fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }
}
