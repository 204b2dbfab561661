//! RED command line front end.
//!
//! The `red` binary reads Robot Framework suite and resource files, prints
//! what the lexer and parser made of them, writes models back out and checks
//! that files survive a read/write cycle unchanged.
//!
//! ```text
//! text ──► red_lexer ──► red_parse ──► RobotFile ──► red_fmt ──► text
//! ```
//!
//! The library half holds the commands so that they can be tested without
//! spawning the binary.

use std::sync::Once;

pub mod commands;
mod options;

pub use options::{CliOptions, OptionsError};
pub use red_fmt::{DumpConfig, RobotDumper};
pub use red_model::RobotFile;
pub use red_parse::{ParserConfig, RobotParser};

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber once per process.
///
/// Nothing is installed unless `RUST_LOG` is set, so the libraries' spans
/// cost nothing by default. `RED_LOG_TREE=1` renders spans as an indented
/// tree instead of flat lines.
///
/// ```text
/// RUST_LOG=red_parse=debug red parse suite.robot
/// RUST_LOG=trace RED_LOG_TREE=1 red dump suite.robot
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let registry = tracing_subscriber::registry().with(filter);
        if std::env::var("RED_LOG_TREE").is_ok_and(|value| value == "1") {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
