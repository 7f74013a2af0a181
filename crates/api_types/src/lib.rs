use serde::{Deserialize, Serialize};

pub mod analytics {
    use super::*;

    /// Summary statistics over the whole transaction store.
    ///
    /// `fraud_percentage` is rounded to 2 decimals, `avg_fraud_probability`
    /// to 4; both are `0` when their denominator is zero.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct FraudSummary {
        pub success: bool,
        pub total_transactions: u64,
        pub fraud_transactions: u64,
        pub fraud_percentage: f64,
        pub avg_fraud_probability: f64,
    }

    /// One category's slice of the fraud population.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct CategoryStat {
        pub category: String,
        pub count: u64,
        /// Share of all fraud, not of the returned (possibly capped) list.
        pub percentage: f64,
        pub avg_amount: f64,
    }

    /// Fraud counts grouped by category, descending by count, at most 20
    /// entries.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct FraudByCategory {
        pub success: bool,
        pub total_fraud: u64,
        pub categories: Vec<CategoryStat>,
    }
}

pub mod service {
    use super::*;
    use std::collections::BTreeMap;

    /// Static metadata served at `/`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ServiceInfo {
        pub service: String,
        pub version: String,
        pub endpoints: BTreeMap<String, String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Health {
        pub status: String,
    }
}

#[cfg(test)]
mod tests {
    use super::analytics::*;

    #[test]
    fn summary_serializes_flat_fields() {
        let summary = FraudSummary {
            success: true,
            total_transactions: 100,
            fraud_transactions: 10,
            fraud_percentage: 10.0,
            avg_fraud_probability: 0.8,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["total_transactions"], 100);
        assert_eq!(json["fraud_percentage"], 10.0);
        assert_eq!(json["avg_fraud_probability"], 0.8);
    }

    #[test]
    fn categories_serialize_in_order() {
        let body = FraudByCategory {
            success: true,
            total_fraud: 3,
            categories: vec![
                CategoryStat {
                    category: "online".to_string(),
                    count: 2,
                    percentage: 66.67,
                    avg_amount: 120.5,
                },
                CategoryStat {
                    category: "retail".to_string(),
                    count: 1,
                    percentage: 33.33,
                    avg_amount: 80.0,
                },
            ],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["categories"][0]["category"], "online");
        assert_eq!(json["categories"][1]["count"], 1);
    }
}
