//! The `transactions` entity.
//!
//! The store is pre-populated by an upstream labeling pipeline; this service
//! only ever reads it. `fraud_probability` is meaningful only on rows with
//! `is_fraud` set, and may be absent even there.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub occurred_at: DateTimeUtc,
    pub transaction_amount: Option<f64>,
    pub is_fraud: bool,
    pub fraud_probability: Option<f64>,
    pub category: Option<String>,
    pub merchant_category: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Resolves the grouping label for a transaction: `category` when present,
/// else `merchant_category`, else `"unknown"`.
pub fn resolve_category(transaction: &Model) -> &str {
    transaction
        .category
        .as_deref()
        .or(transaction.merchant_category.as_deref())
        .unwrap_or("unknown")
}
