//! Model selection by key or name.

use super::{by_key, describe, model_names, ModelDescriptor};
use crate::error::SonarError;

/// Resolves user-facing model tokens against the catalog.
pub struct ModelSelector;

impl ModelSelector {
    /// Resolve a selector key ("1") or a wire name ("sonar-pro").
    ///
    /// Keys are tried first; an unknown token fails with `InvalidModel` and
    /// carries the valid name set.
    pub fn resolve(token: &str) -> Result<&'static ModelDescriptor, SonarError> {
        let token = token.trim();
        if let Some(model) = by_key(token) {
            return Ok(model);
        }
        describe(token).map_err(|_| SonarError::InvalidModel {
            model: token.to_string(),
            valid: model_names().into_iter().map(String::from).collect(),
        })
    }
}
