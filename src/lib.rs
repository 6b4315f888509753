//! sonar: client for the Perplexity Sonar chat-completions API.
//!
//! Validates requests against a fixed model catalog, sends them over HTTPS,
//! and decodes either a single JSON response or an event-stream of text
//! fragments.
//!
//! # Quick Start
//!
//! ```no_run
//! use sonar::prelude::*;
//! use futures::StreamExt;
//!
//! # async fn example() -> sonar::error::Result<()> {
//! let client = CompletionClient::from_env()?;
//! let settings = GenerationSettings::default();
//!
//! let response = sonar::generation::generate_text(&client, "sonar", "Hello!", &settings).await?;
//! println!("{}", response.text());
//!
//! let mut stream = sonar::generation::stream_text(&client, "sonar-pro", "Hello!", &settings).await?;
//! while let Some(fragment) = stream.next().await {
//!     if let Some(text) = fragment?.text() {
//!         print!("{text}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod generation;
pub mod models;
pub mod prelude;
pub mod provider;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;
