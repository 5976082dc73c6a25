use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use tracing::warn;

use super::domain::{DefaultNext, ExpectedContent, QuestionNode, RouteRule};

/// Parsed question sets keyed by lowercased domain, then lowercased level.
///
/// The catalog is an explicit value owned by the caller: load it once, hand
/// it to a [`QuestionStore`](super::QuestionStore), and reload it when the
/// definition source changes. The engine keeps no global state of its own.
#[derive(Debug, Clone, Default)]
pub struct QuestionCatalog {
    domains: BTreeMap<String, BTreeMap<String, Vec<QuestionNode>>>,
}

impl QuestionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and parse a question-set definition file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Parse a question-set definition from JSON text.
    ///
    /// Individual definitions that violate the schema are skipped with a
    /// warning; only an unparsable document is an error.
    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        let raw: BTreeMap<String, BTreeMap<String, Vec<serde_json::Value>>> =
            serde_json::from_str(content)?;

        let mut catalog = Self::new();
        for (domain, levels) in raw {
            for (level, definitions) in levels {
                let mut questions = Vec::with_capacity(definitions.len());
                for value in definitions {
                    match serde_json::from_value::<QuestionDefinition>(value) {
                        Ok(definition) => {
                            if let Some(node) = definition.into_node(&domain, &level) {
                                questions.push(node);
                            }
                        }
                        Err(error) => {
                            warn!(%domain, %level, %error, "skipping unusable question definition");
                        }
                    }
                }
                catalog.insert_set(&domain, &level, questions);
            }
        }

        Ok(catalog)
    }

    /// Insert (or replace) the question set for one (domain, level) pair.
    pub fn insert_set(&mut self, domain: &str, level: &str, questions: Vec<QuestionNode>) {
        self.domains
            .entry(normalize_key(domain))
            .or_default()
            .insert(normalize_key(level), questions);
    }

    /// Look up a question set. Domain matching is case-insensitive and
    /// tolerant: exact match first, then substring match in either direction
    /// between the requested and stored domain keys.
    pub fn question_set(&self, domain: &str, level: &str) -> Option<&[QuestionNode]> {
        let wanted_domain = normalize_key(domain);
        if wanted_domain.is_empty() {
            return None;
        }
        let wanted_level = normalize_key(level);

        if let Some(levels) = self.domains.get(&wanted_domain) {
            if let Some(questions) = levels.get(&wanted_level) {
                return Some(questions);
            }
        }

        // only the first matching key is consulted; if it lacks the level the
        // lookup fails rather than trying further candidates
        self.domains
            .iter()
            .find(|(key, _)| wanted_domain.contains(key.as_str()) || key.contains(&wanted_domain))
            .and_then(|(_, levels)| levels.get(&wanted_level))
            .map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn domain_keys(&self) -> impl Iterator<Item = &str> {
        self.domains.keys().map(String::as_str)
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// The one true failure: the question-set source is completely unreadable.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unable to read question-set source: {0}")]
    Io(#[from] std::io::Error),
    #[error("unable to parse question-set source: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Wire shape of one question definition. Lenient on purpose: anything
/// missing required structure becomes "question not usable", never a failure
/// of the whole set.
#[derive(Debug, Deserialize)]
struct QuestionDefinition {
    id: Option<u32>,
    prompt: Option<String>,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    expected_answers: Option<Vec<String>>,
    #[serde(default)]
    expected_summary: Option<String>,
    #[serde(default)]
    routing: RoutingTable,
    /// Absent means "fall through to sequential order"; an explicit `null`
    /// means "end the interview here"; a number is a concrete target id.
    #[serde(default, deserialize_with = "nullable_id")]
    default_next: Option<Option<u32>>,
    #[serde(default)]
    low_knowledge_phrases: Vec<String>,
    #[serde(default)]
    low_knowledge_reply: Option<String>,
}

impl QuestionDefinition {
    fn into_node(self, domain: &str, level: &str) -> Option<QuestionNode> {
        let (id, prompt) = match (self.id, self.prompt) {
            (Some(id), Some(prompt)) if !prompt.trim().is_empty() => (id, prompt),
            _ => {
                warn!(%domain, %level, "question definition missing id or prompt; skipping");
                return None;
            }
        };

        let expected = match (self.expected_answers, self.expected_summary) {
            (Some(references), summary) => {
                if summary.is_some() {
                    warn!(
                        %domain, %level, question_id = id,
                        "definition populates both expected forms; keeping the reference list"
                    );
                }
                Some(ExpectedContent::References(references))
            }
            (None, Some(summary)) => Some(ExpectedContent::Summary(summary)),
            (None, None) => None,
        };

        let default_next = match self.default_next {
            None => DefaultNext::Unset,
            Some(None) => DefaultNext::EndInterview,
            Some(Some(target)) => DefaultNext::GoTo(target),
        };

        Some(QuestionNode {
            id,
            prompt,
            keywords: self.keywords,
            expected,
            routing: self.routing.0,
            default_next,
            low_knowledge_phrases: self.low_knowledge_phrases,
            low_knowledge_reply: self.low_knowledge_reply,
        })
    }
}

/// Routing map deserialized entry-by-entry so definition order survives.
#[derive(Debug, Default)]
struct RoutingTable(Vec<RouteRule>);

impl<'de> Deserialize<'de> for RoutingTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RoutingVisitor;

        impl<'de> Visitor<'de> for RoutingVisitor {
            type Value = RoutingTable;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of trigger phrases to question ids")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut rules = Vec::new();
                while let Some((trigger, target)) = map.next_entry::<String, u32>()? {
                    rules.push(RouteRule { trigger, target });
                }
                Ok(RoutingTable(rules))
            }
        }

        deserializer.deserialize_map(RoutingVisitor)
    }
}

fn nullable_id<'de, D>(deserializer: D) -> Result<Option<Option<u32>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<u32>::deserialize(deserializer).map(Some)
}
