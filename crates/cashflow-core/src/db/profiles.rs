//! Business profile operations

use rusqlite::{params, OptionalExtension, Row};

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{BusinessProfile, NewProfile, NotificationPreference};
use crate::money::parse_amount;

fn row_to_profile(row: &Row<'_>) -> rusqlite::Result<BusinessProfile> {
    let notification: String = row.get("notification_preference")?;
    let created_at: String = row.get("created_at")?;

    Ok(BusinessProfile {
        id: row.get("id")?,
        email: row.get("email")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        business_name: row.get("business_name")?,
        business_type: row.get("business_type")?,
        business_location: row.get("business_location")?,
        phone_number: row.get("phone_number")?,
        starting_balance: row.get("starting_balance")?,
        monthly_revenue: row.get("monthly_revenue")?,
        monthly_expenses: row.get("monthly_expenses")?,
        financial_goal: row.get("financial_goal")?,
        notification_preference: notification.parse().unwrap_or_default(),
        created_at: parse_datetime(&created_at),
    })
}

impl Database {
    /// Create or replace the profile for an email
    ///
    /// Currency fields in `NewProfile` are free text and go through the
    /// parse-with-default boundary here, so `"₦500,000"` and `""` are both
    /// valid inputs.
    pub fn upsert_profile(&self, profile: &NewProfile) -> Result<i64> {
        if profile.email.trim().is_empty() {
            return Err(Error::InvalidData("profile email is required".to_string()));
        }

        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO profiles (
                email, first_name, last_name, business_name, business_type,
                business_location, phone_number, starting_balance,
                monthly_revenue, monthly_expenses, financial_goal,
                notification_preference
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(email) DO UPDATE SET
                first_name = excluded.first_name,
                last_name = excluded.last_name,
                business_name = excluded.business_name,
                business_type = excluded.business_type,
                business_location = excluded.business_location,
                phone_number = excluded.phone_number,
                starting_balance = excluded.starting_balance,
                monthly_revenue = excluded.monthly_revenue,
                monthly_expenses = excluded.monthly_expenses,
                financial_goal = excluded.financial_goal,
                notification_preference = excluded.notification_preference
            "#,
            params![
                profile.email,
                profile.first_name,
                profile.last_name,
                profile.business_name,
                profile.business_type,
                profile.business_location,
                profile.phone_number,
                parse_amount(&profile.starting_balance),
                parse_amount(&profile.monthly_revenue),
                parse_amount(&profile.monthly_expenses),
                profile.financial_goal,
                profile.notification_preference.as_str(),
            ],
        )?;

        let id: i64 = conn.query_row(
            "SELECT id FROM profiles WHERE email = ?",
            params![profile.email],
            |row| row.get(0),
        )?;
        Ok(id)
    }

    /// Get the profile for an email
    pub fn get_profile(&self, email: &str) -> Result<Option<BusinessProfile>> {
        let conn = self.conn()?;
        let profile = conn
            .query_row(
                "SELECT * FROM profiles WHERE email = ?",
                params![email],
                row_to_profile,
            )
            .optional()?;
        Ok(profile)
    }

    /// Get the first stored profile (single-tenant deployments)
    pub fn get_default_profile(&self) -> Result<Option<BusinessProfile>> {
        let conn = self.conn()?;
        let profile = conn
            .query_row(
                "SELECT * FROM profiles ORDER BY id LIMIT 1",
                [],
                row_to_profile,
            )
            .optional()?;
        Ok(profile)
    }

    /// Update the notification preference for a profile
    pub fn set_notification_preference(
        &self,
        email: &str,
        preference: NotificationPreference,
    ) -> Result<()> {
        let conn = self.conn()?;
        let updated = conn.execute(
            "UPDATE profiles SET notification_preference = ? WHERE email = ?",
            params![preference.as_str(), email],
        )?;

        if updated == 0 {
            return Err(Error::NotFound(format!("profile for {}", email)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> NewProfile {
        NewProfile {
            email: "ada@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Obi".to_string(),
            business_name: "Ada's Kitchen".to_string(),
            business_type: "Restaurant/Food Service".to_string(),
            business_location: "Lagos".to_string(),
            phone_number: "+2348012345678".to_string(),
            starting_balance: "₦500,000".to_string(),
            monthly_revenue: "350000".to_string(),
            monthly_expenses: "₦280,000".to_string(),
            financial_goal: "build_wealth".to_string(),
            notification_preference: NotificationPreference::Email,
        }
    }

    #[test]
    fn test_upsert_and_get_profile() {
        let db = Database::in_memory().unwrap();
        let id = db.upsert_profile(&sample_profile()).unwrap();

        let profile = db.get_profile("ada@example.com").unwrap().unwrap();
        assert_eq!(profile.id, id);
        assert_eq!(profile.starting_balance, 500000.0);
        assert_eq!(profile.monthly_expenses, 280000.0);
        assert_eq!(
            profile.notification_preference,
            NotificationPreference::Email
        );
    }

    #[test]
    fn test_upsert_replaces_existing() {
        let db = Database::in_memory().unwrap();
        let first = db.upsert_profile(&sample_profile()).unwrap();

        let mut updated = sample_profile();
        updated.monthly_revenue = "₦400,000".to_string();
        let second = db.upsert_profile(&updated).unwrap();

        assert_eq!(first, second);
        let profile = db.get_profile("ada@example.com").unwrap().unwrap();
        assert_eq!(profile.monthly_revenue, 400000.0);
    }

    #[test]
    fn test_empty_email_rejected() {
        let db = Database::in_memory().unwrap();
        let mut profile = sample_profile();
        profile.email = "  ".to_string();
        assert!(db.upsert_profile(&profile).is_err());
    }

    #[test]
    fn test_missing_profile_is_none() {
        let db = Database::in_memory().unwrap();
        assert!(db.get_profile("nobody@example.com").unwrap().is_none());
        assert!(db.get_default_profile().unwrap().is_none());
    }

    #[test]
    fn test_unparseable_amounts_default_to_zero() {
        let db = Database::in_memory().unwrap();
        let mut profile = sample_profile();
        profile.starting_balance = "not a number".to_string();
        db.upsert_profile(&profile).unwrap();

        let stored = db.get_profile("ada@example.com").unwrap().unwrap();
        assert_eq!(stored.starting_balance, 0.0);
    }
}
