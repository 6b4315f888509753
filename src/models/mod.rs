//! Model catalog.
//!
//! The catalog is a fixed, ordered table. Table order doubles as the numbering
//! shown to users (the `key` of each entry), and the `name` of each entry is
//! the only value accepted as the `model` field of a request.

pub mod selector;

pub use selector::ModelSelector;

use serde::Serialize;
use strum::{Display, EnumString};

use crate::error::{Result, SonarError};

/// Family a model variant belongs to.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ModelCategory {
    Search,
    Reasoning,
    Research,
    Offline,
}

impl ModelCategory {
    /// All categories, in the order the catalog presents them.
    pub const ALL: [ModelCategory; 4] = [
        ModelCategory::Search,
        ModelCategory::Reasoning,
        ModelCategory::Research,
        ModelCategory::Offline,
    ];

    /// Heading used when listing models of this category.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Search => "Search Models (with web search)",
            Self::Reasoning => "Reasoning Models (with web search)",
            Self::Research => "Research Models (with web search)",
            Self::Offline => "Offline Models (no web search)",
        }
    }
}

/// One selectable model variant and what it can do.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ModelDescriptor {
    /// Short selector token ("1", "2", ...).
    pub key: &'static str,
    /// Wire identifier sent as `model`.
    pub name: &'static str,
    pub description: &'static str,
    pub category: ModelCategory,
    pub supports_web_search: bool,
    pub context_length: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "no_features")]
    pub features: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
    /// One-line "best for" hint for the selection guide.
    #[serde(skip)]
    pub guide: &'static str,
}

impl ModelDescriptor {
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| *f == feature)
    }
}

fn no_features(features: &&[&str]) -> bool {
    features.is_empty()
}

const COT: &[&str] = &["Chain of Thought (CoT)"];

static MODELS: [ModelDescriptor; 6] = [
    ModelDescriptor {
        key: "1",
        name: "sonar",
        description: "Lightweight search model (128k context) - Best for quick factual queries and summaries",
        category: ModelCategory::Search,
        supports_web_search: true,
        context_length: 128_000,
        max_output_tokens: None,
        features: &[],
        note: None,
        guide: "Best for quick factual queries and summaries",
    },
    ModelDescriptor {
        key: "2",
        name: "sonar-pro",
        description: "Advanced search model (200k context) - Best for complex queries and follow-ups",
        category: ModelCategory::Search,
        supports_web_search: true,
        context_length: 200_000,
        max_output_tokens: Some(8_000),
        features: &[],
        note: None,
        guide: "Best for complex queries and follow-ups",
    },
    ModelDescriptor {
        key: "3",
        name: "sonar-reasoning",
        description: "Fast reasoning model (128k context) - Best for quick problem-solving with search",
        category: ModelCategory::Reasoning,
        supports_web_search: true,
        context_length: 128_000,
        max_output_tokens: None,
        features: COT,
        note: None,
        guide: "Best for quick problem-solving with search",
    },
    ModelDescriptor {
        key: "4",
        name: "sonar-reasoning-pro",
        description: "Premier reasoning model (128k context) - Powered by DeepSeek R1 with CoT",
        category: ModelCategory::Reasoning,
        supports_web_search: true,
        context_length: 128_000,
        max_output_tokens: None,
        features: COT,
        note: None,
        guide: "Best for complex reasoning tasks",
    },
    ModelDescriptor {
        key: "5",
        name: "sonar-deep-research",
        description: "Expert research model (128k context) - Best for comprehensive reports and analysis",
        category: ModelCategory::Research,
        supports_web_search: true,
        context_length: 128_000,
        max_output_tokens: None,
        features: &[],
        note: Some("May take 30+ minutes for complex tasks"),
        guide: "Best for comprehensive research and reports",
    },
    ModelDescriptor {
        key: "6",
        name: "r1-1776",
        description: "Offline chat model (128k context) - No web search, best for creative content",
        category: ModelCategory::Offline,
        supports_web_search: false,
        context_length: 128_000,
        max_output_tokens: None,
        features: &[],
        note: Some("Post-trained for uncensored, unbiased, and factual information"),
        guide: "Best for creative content without web search",
    },
];

/// Every model, in table order.
pub fn list_models() -> &'static [ModelDescriptor] {
    &MODELS
}

/// Wire names of every model, in table order.
pub fn model_names() -> Vec<&'static str> {
    MODELS.iter().map(|m| m.name).collect()
}

/// Whether `name` is accepted as a request's `model`.
pub fn is_valid_model_name(name: &str) -> bool {
    MODELS.iter().any(|m| m.name == name)
}

/// Look up a model by wire name.
pub fn describe(name: &str) -> Result<&'static ModelDescriptor> {
    MODELS
        .iter()
        .find(|m| m.name == name)
        .ok_or_else(|| SonarError::ModelNotFound(name.to_string()))
}

/// Look up a model by its selector key.
pub fn by_key(key: &str) -> Option<&'static ModelDescriptor> {
    MODELS.iter().find(|m| m.key == key)
}

/// Models of one category, in table order.
pub fn by_category(category: ModelCategory) -> impl Iterator<Item = &'static ModelDescriptor> {
    MODELS.iter().filter(move |m| m.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_and_keys_are_unique() {
        let names: HashSet<_> = MODELS.iter().map(|m| m.name).collect();
        let keys: HashSet<_> = MODELS.iter().map(|m| m.key).collect();
        assert_eq!(names.len(), MODELS.len());
        assert_eq!(keys.len(), MODELS.len());
    }

    #[test]
    fn list_preserves_table_order() {
        let keys: Vec<_> = list_models().iter().map(|m| m.key).collect();
        assert_eq!(keys, vec!["1", "2", "3", "4", "5", "6"]);
        assert_eq!(model_names()[0], "sonar");
        assert_eq!(model_names()[5], "r1-1776");
    }

    #[test]
    fn describe_unknown_is_not_found() {
        let err = describe("gpt-4o").unwrap_err();
        assert!(matches!(err, SonarError::ModelNotFound(ref n) if n == "gpt-4o"));
    }

    #[test]
    fn validity_is_by_name_not_key() {
        assert!(is_valid_model_name("sonar-pro"));
        assert!(!is_valid_model_name("2"));
        assert!(!is_valid_model_name("Sonar-Pro"));
    }

    #[test]
    fn offline_model_has_no_web_search() {
        let offline: Vec<_> = by_category(ModelCategory::Offline).collect();
        assert_eq!(offline.len(), 1);
        assert!(!offline[0].supports_web_search);
        assert!(MODELS
            .iter()
            .filter(|m| m.category != ModelCategory::Offline)
            .all(|m| m.supports_web_search));
    }

    #[test]
    fn optional_attributes_match_table() {
        assert_eq!(describe("sonar-pro").unwrap().max_output_tokens, Some(8_000));
        assert!(describe("sonar-reasoning").unwrap().has_feature("Chain of Thought (CoT)"));
        assert!(describe("sonar-deep-research").unwrap().note.is_some());
        assert_eq!(describe("sonar").unwrap().max_output_tokens, None);
    }

    #[test]
    fn category_round_trips_through_strings() {
        assert_eq!(ModelCategory::Research.to_string(), "research");
        assert_eq!("offline".parse::<ModelCategory>().unwrap(), ModelCategory::Offline);
    }
}
