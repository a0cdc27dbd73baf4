use crate::domain::{Amount, TransactionRequest};
use csv::{ReaderBuilder, Trim};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum CsvReadError {
    #[error("Path to CSV is invalid!")]
    PathDoesNotExist,

    #[error("Failed to read CSV, print record that was a failure: {0}")]
    IoReadError(String),

    #[error("Transaction {id} has an invalid amount {amount}")]
    InvalidAmount { id: String, amount: Amount },

    #[error("Transaction id {0} appears more than once")]
    DuplicateId(String),
}

pub fn open_csv(path: &str) -> Result<File, CsvReadError> {
    if !Path::new(path).exists() {
        return Err(CsvReadError::PathDoesNotExist);
    }

    File::open(path).map_err(|err| CsvReadError::IoReadError(format!("{path}: {err}")))
}

/// Reads requests in file order. Expects a header row:
/// `id,customer,amount,type,description,priority`.
pub fn read_csv(path: &str) -> Result<Vec<TransactionRequest>, CsvReadError> {
    let file = open_csv(path)?;
    let reader = BufReader::new(file);
    let mut records: Vec<TransactionRequest> = Vec::new();
    let mut seen_ids = HashSet::new();

    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(reader);

    for result in csv_reader.deserialize::<TransactionRequest>() {
        let record = result.map_err(|err| CsvReadError::IoReadError(err.to_string()))?;

        if !record.amount.is_finite() || record.amount < 0.0 {
            return Err(CsvReadError::InvalidAmount {
                id: record.id,
                amount: record.amount,
            });
        }
        if !seen_ids.insert(record.id.clone()) {
            return Err(CsvReadError::DuplicateId(record.id));
        }

        records.push(record);
    }

    info!(count = records.len(), path, "Read transaction requests");
    Ok(records)
}
