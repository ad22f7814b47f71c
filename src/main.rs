//! # Greetings Executable
//!
//! Prints the greetings to the standard output, command arguments are ignored.
use std::io;

use anyhow::Context;
use tracing::error;
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

fn main() {
    init_logging_stderr();

    greetings::print_greetings()
        .context("Greetings could not be printed")
        .unwrap_or_else(|e| {
            error!("{e:#}");
            std::process::exit(1);
        })
}

/// Subscribes to tracing, outputs to stderr so the standard output holds only greetings.
fn init_logging_stderr() {
    let term_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_filter(LevelFilter::WARN);

    tracing_subscriber::registry().with(term_layer).init(); // sets itself as global default subscriber
}
