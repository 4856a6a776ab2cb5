use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::transactions_traits::TransactionServiceTrait;
use crate::errors::Result;
use crate::notifications::{Notification, Severity};
use crate::state::StateContainer;
use crate::transactions::{NewTransaction, Transaction, TransactionStatus, TransactionUpdate};

/// Service for the deposit ledger and its verification workflow.
pub struct TransactionService {
    state: Arc<StateContainer>,
}

impl TransactionService {
    pub fn new(state: Arc<StateContainer>) -> Self {
        Self { state }
    }
}

impl TransactionServiceTrait for TransactionService {
    fn get_transactions(&self) -> Vec<Transaction> {
        self.state.transactions()
    }

    fn get_user_transactions(&self, user_id: &str) -> Vec<Transaction> {
        let mut entries: Vec<Transaction> = self
            .state
            .transactions()
            .into_iter()
            .filter(|t| t.user_id == user_id)
            .collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries
    }

    fn add_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        let transaction = self
            .state
            .append_transaction(new_transaction.into_transaction())?;
        debug!(
            "Ledger entry {} submitted by '{}' for {} {}",
            transaction.id, transaction.user_name, transaction.amount, transaction.currency
        );

        if let Some(admin_id) = self.state.admin_for(&transaction.user_id) {
            self.state.push_notification(Notification::direct(
                admin_id,
                Severity::Info,
                "New deposit submitted",
                format!(
                    "{} submitted {} {} for verification.",
                    transaction.user_name, transaction.amount, transaction.currency
                ),
            ));
        }
        Ok(transaction)
    }

    fn update_transaction_status(
        &self,
        transaction_id: &str,
        status: TransactionStatus,
        notes: Option<String>,
    ) -> Result<()> {
        let updated = self.state.modify_transaction(transaction_id, |transaction| {
            transaction.status = status;
            if notes.is_some() {
                transaction.admin_notes = notes.clone();
            }
        })?;

        let Some(transaction) = updated else {
            debug!(
                "Status update for unknown transaction '{}' ignored",
                transaction_id
            );
            return Ok(());
        };

        match status {
            TransactionStatus::Approved => self.state.push_notification(Notification::direct(
                &transaction.user_id,
                Severity::Success,
                "Deposit verified",
                format!(
                    "Your deposit of {} {} has been verified.",
                    transaction.amount, transaction.currency
                ),
            )),
            _ => self.state.push_notification(Notification::direct(
                &transaction.user_id,
                Severity::Error,
                "Deposit rejected",
                format!(
                    "Your deposit of {} {} was rejected: {}",
                    transaction.amount,
                    transaction.currency,
                    transaction.admin_notes.as_deref().unwrap_or("no notes")
                ),
            )),
        }
        Ok(())
    }

    fn update_transaction(
        &self,
        transaction_id: &str,
        update: TransactionUpdate,
    ) -> Result<Option<Transaction>> {
        self.state
            .modify_transaction(transaction_id, |transaction| update.apply_to(transaction))
    }

    fn delete_transaction(&self, transaction_id: &str) -> Result<()> {
        self.state.remove_transaction(transaction_id)
    }

    fn approved_total(&self) -> Decimal {
        self.state
            .transactions()
            .iter()
            .filter(|t| t.status == TransactionStatus::Approved)
            .map(|t| t.amount)
            .sum()
    }
}
