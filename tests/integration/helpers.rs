use csv::Writer;
use std::error::Error;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Request {
    pub id: String,
    pub customer_id: String,
    pub amount: f64,
    pub kind: &'static str,
    pub description: &'static str,
    pub priority: &'static str,
}

pub fn write_requests_csv(
    dir: &Path,
    file_name: &str,
    requests: &[Request],
) -> Result<PathBuf, Box<dyn Error>> {
    let file_path = dir.join(file_name);
    let file = File::create(&file_path)?;
    let mut writer = Writer::from_writer(file);

    writer.write_record(["id", "customer", "amount", "type", "description", "priority"])?;

    for request in requests {
        writer.write_record([
            request.id.as_str(),
            request.customer_id.as_str(),
            &request.amount.to_string(),
            request.kind,
            request.description,
            request.priority,
        ])?;
    }

    writer.flush()?;

    Ok(file_path)
}

/// Band rows as `(name, lower, upper)`; `None` writes an empty upper bound.
pub fn write_bands_csv(
    dir: &Path,
    file_name: &str,
    bands: &[(&str, f64, Option<f64>)],
) -> Result<PathBuf, Box<dyn Error>> {
    let file_path = dir.join(file_name);
    let mut writer = Writer::from_path(&file_path)?;

    writer.write_record(["name", "lower", "upper"])?;
    for (name, lower, upper) in bands {
        let upper = upper.map(|u| u.to_string()).unwrap_or_default();
        writer.write_record([name.to_string(), lower.to_string(), upper])?;
    }

    writer.flush()?;

    Ok(file_path)
}

pub fn sample_requests() -> Vec<Request> {
    let rows = [
        ("TXN001", "CUST001", 500.0, "transfer", "Payment to merchant", "low"),
        ("TXN002", "CUST002", 5000.0, "transfer", "Bill payment", "medium"),
        ("TXN003", "CUST003", 25000.0, "withdrawal", "Large withdrawal", "high"),
        ("TXN004", "CUST004", 100000.0, "transfer", "Business transfer", "critical"),
        ("TXN005", "CUST001", 1000.0, "deposit", "Boundary deposit", "low"),
    ];

    rows.into_iter()
        .map(|(id, customer, amount, kind, description, priority)| Request {
            id: id.to_string(),
            customer_id: customer.to_string(),
            amount,
            kind,
            description,
            priority,
        })
        .collect()
}
