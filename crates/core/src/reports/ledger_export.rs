use csv::{QuoteStyle, WriterBuilder};

use crate::errors::{Error, Result};
use crate::transactions::Transaction;

/// Renders the ledger snapshot as CSV: one header row, then one quoted row
/// per entry.
pub fn ledger_csv(transactions: &[Transaction]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer
        .write_record([
            "Date",
            "Member",
            "Description",
            "Amount",
            "Currency",
            "Status",
            "Reference",
        ])
        .map_err(|e| Error::Unexpected(e.to_string()))?;

    for transaction in transactions {
        writer
            .write_record([
                transaction.date.to_string(),
                transaction.user_name.clone(),
                transaction.description.clone(),
                transaction.amount.to_string(),
                transaction.currency.clone(),
                transaction.status.as_str().to_string(),
                transaction.account_number.clone().unwrap_or_default(),
            ])
            .map_err(|e| Error::Unexpected(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Unexpected(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::Unexpected(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transactions::NewTransaction;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_ledger_csv_header_and_quoting() {
        let transaction = NewTransaction {
            user_id: "u1".to_string(),
            user_name: "Bob".to_string(),
            amount: dec!(500),
            currency: "KES".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            description: "January, deposit".to_string(),
            account_number: Some("MPX-1".to_string()),
            source_text: None,
        }
        .into_transaction();

        let csv = ledger_csv(&[transaction]).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "\"Date\",\"Member\",\"Description\",\"Amount\",\"Currency\",\"Status\",\"Reference\""
        );
        let row = lines.next().unwrap();
        assert!(row.contains("\"January, deposit\""));
        assert!(row.contains("\"PENDING\""));
        assert!(row.contains("\"500\""));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_ledger_csv_empty_snapshot() {
        let csv = ledger_csv(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
