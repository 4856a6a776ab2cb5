use chrono::{DateTime, Utc};
use log::debug;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use super::target_traits::TargetServiceTrait;
use crate::errors::{Error, Result};
use crate::notifications::{Notification, Severity};
use crate::state::StateContainer;
use crate::target::{SavingsTarget, TargetUpdate};
use crate::transactions::TransactionStatus;

/// Service for the group's shared savings goal.
pub struct TargetService {
    state: Arc<StateContainer>,
}

impl TargetService {
    pub fn new(state: Arc<StateContainer>) -> Self {
        Self { state }
    }

    /// Commit implementation with an explicit clock, so the cooldown can
    /// be exercised deterministically in tests.
    pub fn update_target_at(
        &self,
        update: TargetUpdate,
        now: DateTime<Utc>,
    ) -> Result<SavingsTarget> {
        update.validate(now.date_naive())?;

        let existing = self.state.target();
        if let Some(target) = &existing {
            if !target.can_edit_at(now) {
                return Err(Error::TargetEditLocked {
                    unlocks_at: target.next_edit_at(),
                });
            }
        }

        let target = SavingsTarget {
            id: existing
                .as_ref()
                .map(|t| t.id.clone())
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            title: update.title,
            target_amount: update.target_amount,
            current_amount: existing.map(|t| t.current_amount).unwrap_or(Decimal::ZERO),
            deadline: update.deadline,
            motive: update.motive,
            last_updated: now,
        };
        let target = self.state.set_target(target)?;
        debug!(
            "Savings target '{}' committed: {} by {}",
            target.title, target.target_amount, target.deadline
        );

        self.state.push_notification(Notification::broadcast(
            Severity::Success,
            "Savings target updated",
            format!(
                "New goal: {} - {} by {}",
                target.title, target.target_amount, target.deadline
            ),
        ));
        Ok(target)
    }
}

impl TargetServiceTrait for TargetService {
    fn get_target(&self) -> Option<SavingsTarget> {
        self.state.target()
    }

    fn update_target(&self, update: TargetUpdate) -> Result<SavingsTarget> {
        self.update_target_at(update, Utc::now())
    }

    fn progress(&self) -> Decimal {
        let Some(target) = self.state.target() else {
            return Decimal::ZERO;
        };
        if target.target_amount <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        let approved: Decimal = self
            .state
            .transactions()
            .iter()
            .filter(|t| t.status == TransactionStatus::Approved)
            .map(|t| t.amount)
            .sum();
        approved / target.target_amount
    }

    fn progress_percent(&self) -> f64 {
        (self.progress() * Decimal::ONE_HUNDRED)
            .to_f64()
            .unwrap_or(0.0)
    }
}
