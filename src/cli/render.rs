//! Terminal rendering of the catalog and of errors.

use std::fmt::Write;

use crate::error::SonarError;
use crate::models::{self, ModelCategory};

const RULE_WIDTH: usize = 80;
const MODEL_CARDS_URL: &str = "https://docs.perplexity.ai/models/model-cards";

/// The catalog grouped by category, followed by the selection guide.
pub fn model_menu() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Available Models:");
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));

    for category in ModelCategory::ALL {
        let _ = writeln!(out, "\n{}:", category.heading());
        let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH / 2));
        for model in models::by_category(category) {
            let _ = writeln!(out, "{}. {}", model.key, model.name);
            let _ = writeln!(out, "   {}", model.description);
            if let Some(max) = model.max_output_tokens {
                let _ = writeln!(out, "   Max output tokens: {max}");
            }
            if !model.features.is_empty() {
                let _ = writeln!(out, "   Features: {}", model.features.join(", "));
            }
            if let Some(note) = model.note {
                let _ = writeln!(out, "   Note: {note}");
            }
            out.push('\n');
        }
    }

    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(out, "\nModel Selection Guide:");
    for model in models::list_models() {
        let _ = writeln!(out, "- {}: {}", model.name, model.guide);
    }
    let _ = writeln!(out, "\nFor detailed model information, visit: {MODEL_CARDS_URL}");
    out
}

/// Multi-line description of an error, including any structured API details.
pub fn describe_error(err: &SonarError) -> String {
    let mut out = format!("Error: {err}");
    if let Some(details) = err.details() {
        if let Some(kind) = &details.error_type {
            let _ = write!(out, "\nError Type: {kind}");
        }
        if let Some(message) = &details.message {
            let _ = write!(out, "\nError Message: {message}");
        }
        if let Some(docs) = &details.docs {
            let _ = write!(out, "\nDocumentation: {docs}");
        }
    }
    out
}
