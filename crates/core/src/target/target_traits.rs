use rust_decimal::Decimal;

use crate::errors::Result;
use crate::target::{SavingsTarget, TargetUpdate};

/// Trait for savings-target operations.
pub trait TargetServiceTrait: Send + Sync {
    fn get_target(&self) -> Option<SavingsTarget>;

    /// Commits a target edit. Enforces the 7-day edit lock and the input
    /// validation rules; on success restamps `last_updated` and raises a
    /// broadcast notification with the new goal parameters.
    fn update_target(&self, update: TargetUpdate) -> Result<SavingsTarget>;

    /// Progress ratio: approved ledger total over target amount. Zero when
    /// no target is set. The target's own `current_amount` field is never
    /// consulted.
    fn progress(&self) -> Decimal;

    /// `progress` as a display percentage.
    fn progress_percent(&self) -> f64;
}
