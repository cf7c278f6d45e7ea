//! Core types for the Financial Health Engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cash-runway tier, a strict partition over estimated days of solvency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunwayStatus {
    /// Net-positive cash flow, runway unbounded
    Positive,
    /// More than 180 days
    Good,
    /// 91-180 days
    Warning,
    /// 90 days or fewer
    Critical,
}

impl RunwayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunwayStatus::Positive => "positive",
            RunwayStatus::Good => "good",
            RunwayStatus::Warning => "warning",
            RunwayStatus::Critical => "critical",
        }
    }
}

impl fmt::Display for RunwayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RunwayStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(RunwayStatus::Positive),
            "good" => Ok(RunwayStatus::Good),
            "warning" => Ok(RunwayStatus::Warning),
            "critical" => Ok(RunwayStatus::Critical),
            _ => Err(format!("Unknown runway status: {}", s)),
        }
    }
}

/// Estimated days of solvency: a count, or unbounded when burn is non-positive
///
/// Serializes as the JSON string `"infinite"` or a plain integer, matching
/// what the dashboard metric cards render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunwayDays {
    Infinite,
    Days(u64),
}

impl RunwayDays {
    pub fn is_infinite(&self) -> bool {
        matches!(self, RunwayDays::Infinite)
    }

    /// The day count, if bounded
    pub fn as_days(&self) -> Option<u64> {
        match self {
            RunwayDays::Days(d) => Some(*d),
            RunwayDays::Infinite => None,
        }
    }
}

impl Serialize for RunwayDays {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RunwayDays::Infinite => serializer.serialize_str("infinite"),
            RunwayDays::Days(d) => serializer.serialize_u64(*d),
        }
    }
}

impl<'de> Deserialize<'de> for RunwayDays {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error as DeError;

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(d) => Ok(RunwayDays::Days(d)),
            Raw::Text(s) if s == "infinite" => Ok(RunwayDays::Infinite),
            Raw::Text(s) => Err(DeError::custom(format!("invalid runway days: {}", s))),
        }
    }
}

impl fmt::Display for RunwayDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunwayDays::Infinite => write!(f, "∞"),
            RunwayDays::Days(d) => write!(f, "{}", d),
        }
    }
}

/// Cash-runway estimate, recomputed on every call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashRunway {
    pub days: RunwayDays,
    pub status: RunwayStatus,
    pub message: String,
    /// Burn magnitude; present only when the business is losing money
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_burn: Option<f64>,
}

/// Advisory insight category, used by the UI for color-coding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightType {
    Warning,
    Success,
    Info,
}

impl InsightType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightType::Warning => "warning",
            InsightType::Success => "success",
            InsightType::Info => "info",
        }
    }
}

impl fmt::Display for InsightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How urgent an insight is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightPriority {
    High,
    Medium,
    Low,
}

impl InsightPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightPriority::High => "high",
            InsightPriority::Medium => "medium",
            InsightPriority::Low => "low",
        }
    }

    /// Numeric rank for sorting (higher = more urgent)
    pub fn rank(&self) -> u8 {
        match self {
            InsightPriority::High => 3,
            InsightPriority::Medium => 2,
            InsightPriority::Low => 1,
        }
    }
}

impl fmt::Display for InsightPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A rule-based advisory message, regenerated on every call (not persisted)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    #[serde(rename = "type")]
    pub insight_type: InsightType,
    pub message: String,
    pub priority: InsightPriority,
}

impl Insight {
    pub fn new(
        insight_type: InsightType,
        message: impl Into<String>,
        priority: InsightPriority,
    ) -> Self {
        Self {
            insight_type,
            message: message.into(),
            priority,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runway_days_serialization() {
        let infinite = serde_json::to_value(RunwayDays::Infinite).unwrap();
        assert_eq!(infinite, serde_json::json!("infinite"));

        let bounded = serde_json::to_value(RunwayDays::Days(1800)).unwrap();
        assert_eq!(bounded, serde_json::json!(1800));
    }

    #[test]
    fn test_runway_burn_omitted_when_absent() {
        let runway = CashRunway {
            days: RunwayDays::Infinite,
            status: RunwayStatus::Positive,
            message: "ok".to_string(),
            monthly_burn: None,
        };
        let json = serde_json::to_value(&runway).unwrap();
        assert!(json.get("monthlyBurn").is_none());
        assert_eq!(json["status"], "positive");
    }

    #[test]
    fn test_insight_type_field_name() {
        let insight = Insight::new(InsightType::Success, "ok", InsightPriority::Low);
        let json = serde_json::to_value(&insight).unwrap();
        assert_eq!(json["type"], "success");
        assert_eq!(json["priority"], "low");
    }

    #[test]
    fn test_priority_rank() {
        assert!(InsightPriority::High.rank() > InsightPriority::Medium.rank());
        assert!(InsightPriority::Medium.rank() > InsightPriority::Low.rank());
    }
}
