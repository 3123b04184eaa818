use std::process;

use arith_types::operations_to_json;
use arith_types::types::{Operation, OperationKind};
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use crate::errors::CliError;

mod errors;

fn main() {
    init_logging();

    if let Err(e) = run() {
        error!("{}", e);
        process::exit(1);
    }
}

fn init_logging() {
    let fmt_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_filter(fmt_filter))
        .init();
}

fn run() -> Result<(), CliError> {
    let expressions = vec![
        "3 + 3".parse::<Operation>()?,
        "9 / 3".parse()?,
        Operation::new(3.0, OperationKind::Modulo, 5.0),
    ];

    for operation in &expressions {
        info!("{}", operation);
    }

    let json = operations_to_json(&expressions)?;
    println!("{json}");
    Ok(())
}
