use std::ffi::OsStr;
use std::process::{
    Command,
    Output,
};

use crate::helpers::{
    sample_requests,
    write_bands_csv,
    write_requests_csv,
    Request,
};

fn run_app<S: AsRef<OsStr>>(args: &[S]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_approval-chain"))
        .args(args)
        .output()
        .expect("Failed to execute app")
}

#[test]
fn test_e2e_reference_bands() {
    /* Arrange */
    let dir = tempfile::tempdir().unwrap();
    let input = write_requests_csv(dir.path(), "input_1.csv", &sample_requests()).unwrap();

    /* Act */
    let output = run_app(&[&input]);

    /* Assert */
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "id,customer,amount,outcome,handler",
            "TXN001,CUST001,500.0,approved,Auto-Approval",
            "TXN002,CUST002,5000.0,approved,Supervisor",
            "TXN003,CUST003,25000.0,approved,Manager",
            "TXN004,CUST004,100000.0,approved,Director",
            "TXN005,CUST001,1000.0,approved,Supervisor",
        ]
    );
}

#[test]
fn test_e2e_custom_bands() {
    /* Arrange */
    let dir = tempfile::tempdir().unwrap();
    let input = write_requests_csv(dir.path(), "input_2.csv", &sample_requests()).unwrap();
    let bands = write_bands_csv(
        dir.path(),
        "bands.csv",
        &[("Teller", 0.0, Some(2000.0)), ("Branch Lead", 2000.0, None)],
    )
    .unwrap();

    /* Act */
    let output = run_app(&[&input, &bands]);

    /* Assert */
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("TXN001,CUST001,500.0,approved,Teller"));
    assert!(stdout.contains("TXN004,CUST004,100000.0,approved,Branch Lead"));
    assert!(stdout.contains("TXN005,CUST001,1000.0,approved,Teller"));
}

#[test]
fn test_e2e_gapped_band_table_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_requests_csv(dir.path(), "input_3.csv", &sample_requests()).unwrap();
    let bands = write_bands_csv(
        dir.path(),
        "bands.csv",
        &[("Teller", 0.0, Some(1000.0)), ("Director", 2000.0, None)],
    )
    .unwrap();

    let output = run_app(&[&input, &bands]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_e2e_zero_amount_request() {
    let dir = tempfile::tempdir().unwrap();
    let requests = vec![Request {
        id: "TXN100".to_string(),
        customer_id: "CUST100".to_string(),
        amount: 0.0,
        kind: "deposit",
        description: "Zero deposit",
        priority: "low",
    }];
    let input = write_requests_csv(dir.path(), "input_4.csv", &requests).unwrap();

    let output = run_app(&[&input]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("TXN100,CUST100,0.0,approved,Auto-Approval"));
}
