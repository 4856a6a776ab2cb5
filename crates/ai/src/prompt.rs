//! Renders group state into the assistant's system prompt.

use std::fmt::Write;

use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use pamoja_core::groups::Group;
use pamoja_core::target::SavingsTarget;
use pamoja_core::users::{User, UserStatus};

/// A read-only view of one group, flattened for prompting. The snapshot is
/// taken at call time; the assistant never sees live state.
#[derive(Debug, Clone)]
pub struct GroupSnapshot {
    pub group_name: String,
    pub currency: String,
    pub member_count: usize,
    pub active_member_count: usize,
    pub approved_total: Decimal,
    pub target: Option<SavingsTarget>,
}

impl GroupSnapshot {
    pub fn new(
        group: &Group,
        members: &[User],
        approved_total: Decimal,
        target: Option<SavingsTarget>,
    ) -> Self {
        GroupSnapshot {
            group_name: group.name.clone(),
            currency: group.currency.clone(),
            member_count: members.len(),
            active_member_count: members
                .iter()
                .filter(|m| m.status == UserStatus::Active)
                .count(),
            approved_total,
            target,
        }
    }

    /// Renders the system prompt for this snapshot. Numbers are formatted
    /// as plain decimals; the model is told which currency they are in.
    pub fn system_prompt(&self, question: &str) -> String {
        let mut prompt = String::new();
        let _ = writeln!(
            prompt,
            "You are the friendly savings assistant for '{}', a group savings circle.",
            self.group_name
        );
        let _ = writeln!(
            prompt,
            "The group has {} members ({} active). Verified contributions total {} {}.",
            self.member_count, self.active_member_count, self.approved_total, self.currency
        );
        match &self.target {
            Some(target) => {
                let _ = writeln!(
                    prompt,
                    "The current savings target is '{}': {} {} by {}. Progress is {:.1}%.",
                    target.title,
                    target.target_amount,
                    self.currency,
                    target.deadline,
                    progress_percent(self.approved_total, target.target_amount)
                );
            }
            None => {
                let _ = writeln!(prompt, "The group has not set a savings target yet.");
            }
        }
        let _ = writeln!(
            prompt,
            "Answer briefly and encouragingly. Do not give regulated financial advice."
        );
        let _ = write!(prompt, "\nMember question: {}", question);
        prompt
    }
}

fn progress_percent(approved: Decimal, target: Decimal) -> f64 {
    if target <= Decimal::ZERO {
        return 0.0;
    }
    (approved / target * Decimal::ONE_HUNDRED)
        .to_f64()
        .unwrap_or(0.0)
}
