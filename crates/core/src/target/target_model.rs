//! Savings-target domain models.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Cooldown between successive target edits: 7 days.
pub const EDIT_COOLDOWN_MS: i64 = 604_800_000;

/// The cooldown as a chrono duration.
pub fn edit_cooldown() -> Duration {
    Duration::milliseconds(EDIT_COOLDOWN_MS)
}

/// The group's shared savings goal. Singleton per group.
///
/// `current_amount` is informational only; true progress is derived by
/// summing approved ledger amounts, never read from this field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavingsTarget {
    pub id: String,
    pub title: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub deadline: NaiveDate,
    /// Free-text reason the group is saving.
    pub motive: String,
    /// Commit time of the last accepted edit; the edit lock counts from
    /// here.
    pub last_updated: DateTime<Utc>,
}

impl SavingsTarget {
    /// Whether an edit may commit at `now`.
    pub fn can_edit_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.next_edit_at()
    }

    /// The instant the edit lock expires.
    pub fn next_edit_at(&self) -> DateTime<Utc> {
        self.last_updated + edit_cooldown()
    }
}

/// Input model for committing a target edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetUpdate {
    pub title: String,
    pub target_amount: Decimal,
    pub deadline: NaiveDate,
    pub motive: String,
}

impl TargetUpdate {
    /// Validates an edit against `today`: the amount must be strictly
    /// positive and the deadline must not already have passed.
    pub fn validate(&self, today: NaiveDate) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "title".to_string(),
            )));
        }
        if self.target_amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Target amount must be greater than zero".to_string(),
            )));
        }
        if self.deadline < today {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Deadline cannot be in the past".to_string(),
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn target_updated_at(instant: DateTime<Utc>) -> SavingsTarget {
        SavingsTarget {
            id: "t1".to_string(),
            title: "Land purchase".to_string(),
            target_amount: dec!(100000),
            current_amount: Decimal::ZERO,
            deadline: NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
            motive: "Buy a plot together".to_string(),
            last_updated: instant,
        }
    }

    #[test]
    fn test_edit_lock_window() {
        let committed = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
        let target = target_updated_at(committed);
        assert!(!target.can_edit_at(committed + Duration::days(6)));
        assert!(target.can_edit_at(committed + Duration::days(7)));
        assert_eq!(target.next_edit_at(), committed + Duration::days(7));
    }

    #[test]
    fn test_update_validation() {
        let today = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let mut update = TargetUpdate {
            title: "Land purchase".to_string(),
            target_amount: dec!(100000),
            deadline: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
            motive: String::new(),
        };
        assert!(update.validate(today).is_ok());

        update.target_amount = Decimal::ZERO;
        assert!(update.validate(today).is_err());

        update.target_amount = dec!(100000);
        update.deadline = NaiveDate::from_ymd_opt(2026, 5, 31).unwrap();
        assert!(update.validate(today).is_err());

        // A deadline of exactly today is still acceptable.
        update.deadline = today;
        assert!(update.validate(today).is_ok());
    }
}
