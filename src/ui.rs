//! Terminal output: a spinner while the roster is fetched, coloured results.
//!
//! Uses `indicatif` for the spinner and `console` for styling.

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::DispatchError;
use crate::search::{SearchRequest, SearchResponse};

/// Visual progress for a single dispatch search.
pub struct SearchProgress {
    pb: ProgressBar,
    green: Style,
    red: Style,
    yellow: Style,
}

impl SearchProgress {
    /// Start the spinner for `request`.
    pub fn start(request: &SearchRequest) -> Self {
        let pb = ProgressBar::new_spinner();
        // A bad template only loses the spinner glyph, never the search.
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(format!(
            "Finding a robot for load {} at ({}, {})",
            request.load_id, request.x, request.y
        ));
        pb.enable_steady_tick(std::time::Duration::from_millis(100));

        Self {
            pb,
            green: Style::new().green().bold(),
            red: Style::new().red().bold(),
            yellow: Style::new().yellow(),
        }
    }

    /// Stop the spinner and print the outcome.
    pub fn finish(&self, outcome: &Result<SearchResponse, DispatchError>) {
        self.pb.finish_and_clear();
        match outcome {
            Ok(response) => {
                println!(
                    "  {} Robot {} (battery {}%, {:.3} units away)",
                    self.green.apply_to("✓"),
                    response.robot_id,
                    response.battery_level,
                    response.distance_to_goal
                );
            }
            Err(DispatchError::NoCandidates) => {
                println!("  {} No robots available", self.yellow.apply_to("∅"));
            }
            Err(err) => {
                println!("  {} {err}", self.red.apply_to("✗"));
            }
        }
    }
}

/// Print the response in its wire format.
pub fn print_json(response: &SearchResponse) {
    println!(
        "{}",
        serde_json::to_string_pretty(response).unwrap_or_default()
    );
}
