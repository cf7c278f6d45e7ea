//! Domain models for CashFlow

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::health::{CashRunway, Insight};

/// A business profile collected during onboarding
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub business_name: String,
    /// Free-text category ("Retail Shop", "Restaurant/Food Service", ...).
    /// Stored verbatim; classified via [`BusinessCategory::classify`] when
    /// generating insights.
    pub business_type: String,
    pub business_location: String,
    pub phone_number: String,
    pub starting_balance: f64,
    pub monthly_revenue: f64,
    pub monthly_expenses: f64,
    pub financial_goal: String,
    pub notification_preference: NotificationPreference,
    pub created_at: DateTime<Utc>,
}

/// Profile data submitted at registration/setup (pre-persistence)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub business_name: String,
    pub business_type: String,
    #[serde(default)]
    pub business_location: String,
    #[serde(default)]
    pub phone_number: String,
    /// Currency fields accept free-text amounts; parse with
    /// [`crate::money::parse_amount`] before computation.
    pub starting_balance: String,
    pub monthly_revenue: String,
    pub monthly_expenses: String,
    #[serde(default)]
    pub financial_goal: String,
    #[serde(default)]
    pub notification_preference: NotificationPreference,
}

/// How the user wants to receive reports and alerts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPreference {
    #[default]
    Email,
    Whatsapp,
    None,
}

impl NotificationPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Whatsapp => "whatsapp",
            Self::None => "none",
        }
    }
}

impl std::str::FromStr for NotificationPreference {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "email" => Ok(Self::Email),
            "whatsapp" => Ok(Self::Whatsapp),
            "none" => Ok(Self::None),
            _ => Err(format!("Unknown notification preference: {}", s)),
        }
    }
}

impl std::fmt::Display for NotificationPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Transaction direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A ledger entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub description: String,
    /// Always stored as a non-negative magnitude; direction lives in `tx_type`.
    pub amount: f64,
    pub category: String,
    pub tx_type: TransactionType,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// A transaction to insert
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub description: String,
    pub amount: f64,
    #[serde(default)]
    pub category: String,
    pub tx_type: TransactionType,
    pub date: NaiveDate,
}

/// Time window for transaction/analytics queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
    #[serde(rename = "1y")]
    Year,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "7d",
            Self::Month => "30d",
            Self::Quarter => "90d",
            Self::Year => "1y",
        }
    }

    /// Number of days covered by this period
    pub fn days(&self) -> i64 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
            Self::Year => 365,
        }
    }
}

impl std::str::FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "7d" => Ok(Self::Week),
            "30d" => Ok(Self::Month),
            "90d" => Ok(Self::Quarter),
            "1y" => Ok(Self::Year),
            _ => Err(format!("Unknown period: {} (use 7d, 30d, 90d, or 1y)", s)),
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Enumerated business category, classified from free-text profile input
///
/// Insight rules match on this tag rather than on raw substrings, so
/// unrecognized text lands in a defined default bucket instead of silently
/// matching nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessCategory {
    Restaurant,
    Retail,
    Services,
    Beauty,
    Tech,
    Construction,
    Transport,
    Other,
}

impl BusinessCategory {
    /// Keyword lookup table: first matching keyword wins, top to bottom.
    const KEYWORDS: &'static [(&'static str, BusinessCategory)] = &[
        ("restaurant", BusinessCategory::Restaurant),
        ("food", BusinessCategory::Restaurant),
        ("retail", BusinessCategory::Retail),
        ("shop", BusinessCategory::Retail),
        ("service", BusinessCategory::Services),
        ("consult", BusinessCategory::Services),
        ("beauty", BusinessCategory::Beauty),
        ("salon", BusinessCategory::Beauty),
        ("tech", BusinessCategory::Tech),
        ("software", BusinessCategory::Tech),
        ("construction", BusinessCategory::Construction),
        ("transport", BusinessCategory::Transport),
        ("logistics", BusinessCategory::Transport),
    ];

    /// Classify free-text business type (case-insensitive), falling back to
    /// [`BusinessCategory::Other`].
    pub fn classify(business_type: &str) -> Self {
        let lower = business_type.to_lowercase();
        for (keyword, category) in Self::KEYWORDS {
            if lower.contains(keyword) {
                return *category;
            }
        }
        Self::Other
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Restaurant => "restaurant",
            Self::Retail => "retail",
            Self::Services => "services",
            Self::Beauty => "beauty",
            Self::Tech => "tech",
            Self::Construction => "construction",
            Self::Transport => "transport",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for BusinessCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The `/api/dashboard` payload: metric cards plus the insight panel
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub business_name: String,
    pub business_type: String,
    pub current_balance: f64,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    /// 0-100, clamped
    pub health_score: u8,
    pub cash_runway: CashRunway,
    pub insights: Vec<Insight>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_classify_known_categories() {
        assert_eq!(
            BusinessCategory::classify("Retail Shop"),
            BusinessCategory::Retail
        );
        assert_eq!(
            BusinessCategory::classify("Restaurant/Food Service"),
            BusinessCategory::Restaurant
        );
        assert_eq!(
            BusinessCategory::classify("BEAUTY/SALON"),
            BusinessCategory::Beauty
        );
        assert_eq!(
            BusinessCategory::classify("Logistics & Haulage"),
            BusinessCategory::Transport
        );
    }

    #[test]
    fn test_classify_falls_back_to_other() {
        assert_eq!(BusinessCategory::classify(""), BusinessCategory::Other);
        assert_eq!(
            BusinessCategory::classify("Agriculture"),
            BusinessCategory::Other
        );
    }

    #[test]
    fn test_period_roundtrip() {
        assert_eq!(Period::from_str("30d").unwrap(), Period::Month);
        assert_eq!(Period::Year.days(), 365);
        assert!(Period::from_str("2w").is_err());
    }

    #[test]
    fn test_transaction_type_parse() {
        assert_eq!(
            TransactionType::from_str("Income").unwrap(),
            TransactionType::Income
        );
        assert!(TransactionType::from_str("transfer").is_err());
    }
}
