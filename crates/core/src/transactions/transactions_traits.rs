use rust_decimal::Decimal;

use crate::errors::Result;
use crate::transactions::{NewTransaction, Transaction, TransactionStatus, TransactionUpdate};

/// Trait for ledger operations.
pub trait TransactionServiceTrait: Send + Sync {
    fn get_transactions(&self) -> Vec<Transaction>;

    /// Ledger entries of one member, newest first.
    fn get_user_transactions(&self, user_id: &str) -> Vec<Transaction>;

    /// Appends a new entry with status forced to PENDING and notifies the
    /// group admin. No duplicate-submission check is performed.
    fn add_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;

    /// Admin moderation path. Silently no-ops on an unknown id; on success
    /// rewrites status and notes and notifies the owning member
    /// ("verified" with success severity on APPROVED, "rejected" with
    /// error severity carrying the notes otherwise).
    fn update_transaction_status(
        &self,
        transaction_id: &str,
        status: TransactionStatus,
        notes: Option<String>,
    ) -> Result<()>;

    /// Generic merge-patch with no notification side effect; used for
    /// note-only edits.
    fn update_transaction(
        &self,
        transaction_id: &str,
        update: TransactionUpdate,
    ) -> Result<Option<Transaction>>;

    /// Unconditional removal; no audit trail is kept.
    fn delete_transaction(&self, transaction_id: &str) -> Result<()>;

    /// Sum of APPROVED amounts - the single source of truth for
    /// target-progress computation.
    fn approved_total(&self) -> Decimal;
}
