//! The two fraud aggregations.
//!
//! Both are pure reads: counts come from the store, means and percentages
//! are derived here and never persisted. Zero denominators short-circuit
//! to zero instead of dividing.

use std::collections::HashMap;

use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect};

use crate::{Engine, ResultEngine, transactions, util::round_to};

/// Categories returned by [`Engine::fraud_by_category`] are capped at this
/// many entries after sorting.
pub const CATEGORY_CAP: usize = 20;

/// Overall fraud statistics for the whole store.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub total_transactions: u64,
    pub fraud_transactions: u64,
    /// Percentage of all transactions flagged as fraud, 2 decimals.
    pub fraud_percentage: f64,
    /// Mean `fraud_probability` over fraud rows that carry one, 4 decimals.
    pub avg_fraud_probability: f64,
}

/// One category's slice of the fraud population.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryGroup {
    pub category: String,
    pub count: u64,
    /// Share of `total_fraud`, not of the capped list, 2 decimals.
    pub percentage: f64,
    /// Mean `transaction_amount` over rows that carry one, 2 decimals.
    pub avg_amount: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryBreakdown {
    pub total_fraud: u64,
    pub categories: Vec<CategoryGroup>,
}

impl Engine {
    /// Computes total/fraud transaction counts, the fraud percentage and the
    /// average fraud probability.
    ///
    /// Rows with a null `fraud_probability` are excluded from the mean, not
    /// treated as zero. Rounding is half away from zero.
    pub async fn fraud_summary(&self) -> ResultEngine<Summary> {
        let total = transactions::Entity::find().count(&self.database).await?;
        let fraud = transactions::Entity::find()
            .filter(transactions::Column::IsFraud.eq(true))
            .count(&self.database)
            .await?;

        let fraud_percentage = if total > 0 {
            round_to(fraud as f64 / total as f64 * 100.0, 2)
        } else {
            0.0
        };

        let avg_fraud_probability = if fraud > 0 {
            let probabilities: Vec<Option<f64>> = transactions::Entity::find()
                .select_only()
                .column(transactions::Column::FraudProbability)
                .filter(transactions::Column::IsFraud.eq(true))
                .into_tuple()
                .all(&self.database)
                .await?;

            let scored: Vec<f64> = probabilities.into_iter().flatten().collect();
            if scored.is_empty() {
                0.0
            } else {
                round_to(scored.iter().sum::<f64>() / scored.len() as f64, 4)
            }
        } else {
            0.0
        };

        Ok(Summary {
            total_transactions: total,
            fraud_transactions: fraud,
            fraud_percentage,
            avg_fraud_probability,
        })
    }

    /// Groups fraudulent transactions by resolved category label, with per
    /// group count, share of all fraud and average amount.
    ///
    /// Sorted descending by count and truncated to [`CATEGORY_CAP`] entries;
    /// tie order between equal counts is unspecified. When the store holds
    /// no fraud at all the grouped scan is skipped entirely.
    pub async fn fraud_by_category(&self) -> ResultEngine<CategoryBreakdown> {
        let total_fraud = transactions::Entity::find()
            .filter(transactions::Column::IsFraud.eq(true))
            .count(&self.database)
            .await?;

        if total_fraud == 0 {
            return Ok(CategoryBreakdown {
                total_fraud: 0,
                categories: Vec::new(),
            });
        }

        let rows = transactions::Entity::find()
            .filter(transactions::Column::IsFraud.eq(true))
            .all(&self.database)
            .await?;

        #[derive(Default)]
        struct Group {
            count: u64,
            amount_sum: f64,
            amount_count: u64,
        }

        let mut groups: HashMap<String, Group> = HashMap::new();
        for row in &rows {
            let label = transactions::resolve_category(row);
            let group = groups.entry(label.to_string()).or_default();
            group.count += 1;
            if let Some(amount) = row.transaction_amount {
                group.amount_sum += amount;
                group.amount_count += 1;
            }
        }

        let mut categories: Vec<CategoryGroup> = groups
            .into_iter()
            .map(|(category, group)| CategoryGroup {
                category,
                count: group.count,
                percentage: round_to(group.count as f64 / total_fraud as f64 * 100.0, 2),
                avg_amount: if group.amount_count > 0 {
                    round_to(group.amount_sum / group.amount_count as f64, 2)
                } else {
                    0.0
                },
            })
            .collect();

        categories.sort_by(|a, b| b.count.cmp(&a.count));
        categories.truncate(CATEGORY_CAP);

        Ok(CategoryBreakdown {
            total_fraud,
            categories,
        })
    }
}
