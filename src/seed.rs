use std::io::Read;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{Account, Error};

/// The two accounts every fresh process starts with.
pub fn default_accounts() -> Vec<Account> {
    vec![
        Account::new("user1", "1234", Decimal::new(1000, 0)),
        Account::new("user2", "5678", Decimal::new(500, 0)),
    ]
}

/// Reads seed accounts from CSV with an `id,pin,balance` header.
pub struct CsvReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CsvReader<R> {
    pub fn new(reader: R) -> Self {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        Self { reader: rdr }
    }

    /// Parses every row, stopping at the first invalid one.
    pub fn accounts(self) -> Result<Vec<Account>, Error> {
        let accounts = self
            .reader
            .into_deserialize::<CsvRow>()
            .enumerate()
            .map(|(index, row_res)| {
                // header is line 1
                let line = index + 2;
                let row = row_res.map_err(|e| {
                    Error::Seed(format!("line {}: CSV deserialization error: {}", line, e))
                })?;
                Account::try_from(row)
                    .map_err(|e| Error::Seed(format!("line {}: {}", line, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if accounts.is_empty() {
            return Err(Error::Seed("seed file contains no accounts".to_string()));
        }

        Ok(accounts)
    }
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Deserialize)]
struct CsvRow {
    id: String,
    pin: String,
    balance: Decimal,
}

impl TryFrom<CsvRow> for Account {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        if row.id.is_empty() {
            return Err(Error::Validation("account id must not be empty".to_string()));
        }
        if row.pin.is_empty() {
            return Err(Error::Validation(format!(
                "account {} has an empty pin",
                row.id
            )));
        }
        if row.balance < Decimal::ZERO {
            return Err(Error::Validation(format!(
                "account {} has a negative balance: {}",
                row.id, row.balance
            )));
        }

        Ok(Account::new(row.id, row.pin, row.balance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn default_accounts_match_startup_state() {
        let accounts = default_accounts();

        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].id, "user1");
        assert!(accounts[0].verify_pin("1234"));
        assert_eq!(accounts[0].balance, dec!(1000));
        assert_eq!(accounts[1].id, "user2");
        assert!(accounts[1].verify_pin("5678"));
        assert_eq!(accounts[1].balance, dec!(500));
    }

    #[test]
    fn reads_trimmed_rows() {
        let data = "id, pin, balance\n alice , 0001, 12.50\nbob,0002,0\n";

        let accounts = CsvReader::new(data.as_bytes()).accounts().unwrap();

        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].id, "alice");
        assert!(accounts[0].verify_pin("0001"));
        assert_eq!(accounts[0].balance, dec!(12.50));
        assert_eq!(accounts[1].balance, Decimal::ZERO);
    }

    #[test]
    fn rejects_negative_balance_with_line_number() {
        let data = "id,pin,balance\nalice,1,10\nbob,2,-5\n";

        let err = CsvReader::new(data.as_bytes()).accounts().unwrap_err();

        let message = err.to_string();
        assert!(message.contains("line 3"), "{}", message);
        assert!(message.contains("negative balance"), "{}", message);
    }

    #[test]
    fn rejects_empty_pin() {
        let data = "id,pin,balance\nalice,,10\n";

        let err = CsvReader::new(data.as_bytes()).accounts().unwrap_err();

        assert!(err.to_string().contains("empty pin"));
    }

    #[test]
    fn rejects_malformed_balance() {
        let data = "id,pin,balance\nalice,1,lots\n";

        let err = CsvReader::new(data.as_bytes()).accounts().unwrap_err();

        assert!(matches!(err, Error::Seed(_)));
    }

    #[test]
    fn rejects_file_without_accounts() {
        let err = CsvReader::new("id,pin,balance\n".as_bytes())
            .accounts()
            .unwrap_err();

        assert!(err.to_string().contains("no accounts"));
    }
}
