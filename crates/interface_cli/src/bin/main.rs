//! Party Directory - sample binary
//!
//! Builds the sample customer and vendor and prints each rendered party.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin party-directory
//!
//! DIRECTORY_LOG_LEVEL=debug DIRECTORY_LOG_FORMAT=json cargo run --bin party-directory
//! ```
//!
//! # Environment Variables
//!
//! * `DIRECTORY_LOG_LEVEL` - Log level or filter directive (default: info)
//! * `DIRECTORY_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! * `RUST_LOG` - Overrides `DIRECTORY_LOG_LEVEL` when set

use domain_party::PartyFactory;
use interface_cli::{config::CliConfig, logging::init_tracing, sample_directory};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = CliConfig::from_env()?;
    init_tracing(&config.log_level, config.log_format);

    let factory = PartyFactory::system();
    let directory = sample_directory(&factory)?;

    for party in &directory {
        println!("{party}");
    }

    tracing::info!(
        parties = directory.len(),
        printed_at = %factory.clock().now(),
        "Directory printed"
    );
    Ok(())
}
