//! Command-line interface built on clap.
//!
//! [`Cli`] carries the global flags (`--base-url`, `--json`, `--verbose`) and a
//! [`Command`]: `search` against the live status service, or `select` against a
//! roster saved in a local file.

use clap::{Parser, Subcommand};

use crate::search::SearchRequest;

/// Pick the best robot to send for a load.
#[derive(Debug, Parser)]
#[command(name = "robot-dispatch", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Status service base URL (overrides dispatch.toml and ROBOT_STATUS_BASE_URL).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Print the selection as JSON instead of styled text.
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    /// Enable debug logging.
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch live robot statuses and select a robot for the load.
    Search {
        /// Identifier of the load to move.
        #[arg(long)]
        load_id: String,

        /// Goal x coordinate.
        #[arg(long, allow_negative_numbers = true, value_parser = parse_coordinate)]
        x: f64,

        /// Goal y coordinate.
        #[arg(long, allow_negative_numbers = true, value_parser = parse_coordinate)]
        y: f64,
    },

    /// Select a robot from a roster stored in a local JSON file.
    Select {
        /// Path to a JSON array of robot statuses.
        #[arg(long)]
        file: String,

        /// Identifier of the load to move.
        #[arg(long, default_value = "local")]
        load_id: String,

        #[arg(long, allow_negative_numbers = true, value_parser = parse_coordinate)]
        x: f64,

        #[arg(long, allow_negative_numbers = true, value_parser = parse_coordinate)]
        y: f64,
    },
}

/// Parse a goal coordinate, rejecting `NaN` and infinities.
fn parse_coordinate(value: &str) -> Result<f64, String> {
    let coordinate: f64 = value
        .parse()
        .map_err(|e| format!("invalid coordinate {value:?}: {e}"))?;
    if coordinate.is_finite() {
        Ok(coordinate)
    } else {
        Err(format!("coordinate must be finite, got {value:?}"))
    }
}

impl Command {
    pub fn request(&self) -> SearchRequest {
        match self {
            Command::Search { load_id, x, y } | Command::Select { load_id, x, y, .. } => {
                SearchRequest {
                    load_id: load_id.clone(),
                    x: *x,
                    y: *y,
                }
            }
        }
    }
}
