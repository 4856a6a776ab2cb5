//! Transactions module - the deposit ledger and its verification workflow.

mod transactions_model;
mod transactions_service;
mod transactions_traits;

#[cfg(test)]
mod transactions_service_tests;

pub use transactions_model::{NewTransaction, Transaction, TransactionStatus, TransactionUpdate};
pub use transactions_service::TransactionService;
pub use transactions_traits::TransactionServiceTrait;
