//! Transaction domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Verification status of a ledger entry.
///
/// Every entry starts `Pending`. The admin moderation path moves it to
/// `Approved` or `Rejected`. Only `Approved` amounts count toward the
/// savings-target progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl TransactionStatus {
    /// Display name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::Approved => "APPROVED",
            TransactionStatus::Rejected => "REJECTED",
        }
    }
}

/// A claimed deposit awaiting (or past) admin verification.
///
/// The amount is a signed decimal; the data model does not require it to be
/// positive. Repeated submission of identical content creates distinct
/// records - there is no deduplication key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    /// Denormalized for display in the ledger table.
    pub user_name: String,
    pub amount: Decimal,
    pub currency: String,
    pub date: NaiveDate,
    pub description: String,
    pub status: TransactionStatus,
    /// Account or payment reference number, when the member supplied one.
    pub account_number: Option<String>,
    /// Raw text the entry was parsed from (e.g. a pasted SMS receipt).
    pub source_text: Option<String>,
    /// Moderation note set by the admin on approval or rejection.
    pub admin_notes: Option<String>,
}

/// Input model for submitting a deposit. Carries no status field: creation
/// always stamps `Pending`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub user_id: String,
    pub user_name: String,
    pub amount: Decimal,
    pub currency: String,
    pub date: NaiveDate,
    pub description: String,
    pub account_number: Option<String>,
    pub source_text: Option<String>,
}

impl NewTransaction {
    /// Builds the ledger record, generating the id and forcing the status
    /// to `Pending`.
    pub fn into_transaction(self) -> Transaction {
        Transaction {
            id: Uuid::new_v4().to_string(),
            user_id: self.user_id,
            user_name: self.user_name,
            amount: self.amount,
            currency: self.currency,
            date: self.date,
            description: self.description,
            status: TransactionStatus::Pending,
            account_number: self.account_number,
            source_text: self.source_text,
            admin_notes: None,
        }
    }
}

/// Merge-patch input for note-only and correction edits. Does not emit
/// notifications; status moderation goes through the status update
/// operation instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    pub amount: Option<Decimal>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub account_number: Option<String>,
    pub admin_notes: Option<String>,
}

impl TransactionUpdate {
    /// Applies the patch to a ledger record.
    pub fn apply_to(&self, transaction: &mut Transaction) {
        if let Some(amount) = self.amount {
            transaction.amount = amount;
        }
        if let Some(date) = self.date {
            transaction.date = date;
        }
        if let Some(description) = &self.description {
            transaction.description = description.clone();
        }
        if let Some(account_number) = &self.account_number {
            transaction.account_number = Some(account_number.clone());
        }
        if let Some(admin_notes) = &self.admin_notes {
            transaction.admin_notes = Some(admin_notes.clone());
        }
    }
}
