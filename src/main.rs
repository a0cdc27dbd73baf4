use approval_chain::config::{ConfigError, PipelineConfig};
use approval_chain::csv_reader::{read_csv, CsvReadError};
use approval_chain::report::{write_decisions, ReportError};
use approval_chain::{ApprovalProcessor, ReviewQueue};
use std::env;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::task;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    CsvRead(#[from] CsvReadError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("Reader task failed: {0}")]
    Join(#[from] task::JoinError),
    #[error("Usage: approval-chain <requests.csv> [bands.csv]")]
    ArgsLengthError,
}

///
/// 1. Parse args: requests CSV path, optional band table CSV path.
///
/// 2. Build the pipeline (band table from file, or the reference tiers) while the
///    requests are read on a blocking task.
///
/// 3. Run the batch, write one decision row per request to stdout. Requests no
///    approver claims are reported as `manual_review`, not as an error.
///
#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("approval_chain=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        return Err(AppError::ArgsLengthError);
    }

    let csv_path = args[1].clone();
    let config = PipelineConfig {
        bands_path: args.get(2).map(PathBuf::from),
        strict: true,
    };

    // 1.
    let reader_handle = task::spawn_blocking(move || read_csv(&csv_path));

    // 2.
    let pipeline = Arc::new(config.build_pipeline()?);
    info!(handlers = pipeline.len(), "Approval chain ready");
    let requests = reader_handle.await??;

    // 3.
    let processor = ApprovalProcessor::new(pipeline);
    let review_queue = ReviewQueue::new();
    let summary = processor.process_batch(&requests, &review_queue);

    write_decisions(io::stdout().lock(), &summary.decisions)?;

    for (handler, count) in &summary.approvals_by_handler {
        info!(handler = %handler, count, "Approvals");
    }
    if !review_queue.is_empty() {
        info!(
            pending = review_queue.len(),
            "No automatic approver for some amounts; routed for manual review"
        );
    }

    Ok(())
}
