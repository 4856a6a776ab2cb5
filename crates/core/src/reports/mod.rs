//! Reports module - CSV export of the ledger snapshot.

mod ledger_export;

pub use ledger_export::ledger_csv;
