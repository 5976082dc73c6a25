use tracing::warn;

use super::catalog::QuestionCatalog;
use super::domain::QuestionNode;

/// Read-only lookup surface over a [`QuestionCatalog`].
///
/// The store holds the catalog by value; invalidation is caller-controlled
/// via [`QuestionStore::reload`] (e.g. on definition-file change). Lookups
/// never fail: a (domain, level) pair with no questions yields an empty set
/// and a warning, not an error.
#[derive(Debug, Clone, Default)]
pub struct QuestionStore {
    catalog: QuestionCatalog,
}

impl QuestionStore {
    pub fn new(catalog: QuestionCatalog) -> Self {
        Self { catalog }
    }

    /// Swap in a freshly loaded catalog.
    pub fn reload(&mut self, catalog: QuestionCatalog) {
        self.catalog = catalog;
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// The ordered question set for a (domain, level) pair, or an empty
    /// slice when nothing matches.
    pub fn questions(&self, domain: &str, level: &str) -> &[QuestionNode] {
        match self.catalog.question_set(domain, level) {
            Some(questions) => questions,
            None => {
                warn!(%domain, %level, "no questions found for domain/level");
                &[]
            }
        }
    }

    pub fn first_question(&self, domain: &str, level: &str) -> Option<&QuestionNode> {
        self.questions(domain, level).first()
    }

    pub fn find_by_id(&self, domain: &str, level: &str, id: u32) -> Option<&QuestionNode> {
        self.questions(domain, level)
            .iter()
            .find(|question| question.id == id)
    }

    /// The node immediately following `current_id` in list order; `None` when
    /// `current_id` is last or not found.
    pub fn next_sequential(&self, domain: &str, level: &str, current_id: u32) -> Option<&QuestionNode> {
        let questions = self.questions(domain, level);
        let index = questions
            .iter()
            .position(|question| question.id == current_id)?;
        questions.get(index + 1)
    }
}

/// Opening line for an interview session. Purely presentational; kept here so
/// every caller greets candidates the same way.
pub fn greeting(user_name: Option<&str>, domain: Option<&str>, level: Option<&str>) -> String {
    let name = user_name.map(|name| format!(" {name}")).unwrap_or_default();
    let domain_text = domain
        .map(|domain| format!(" for the {domain} position"))
        .unwrap_or_default();
    let level_text = level
        .map(|level| format!(" at {level} level"))
        .unwrap_or_default();

    format!(
        "Hello{name}! Welcome to your technical interview practice session{domain_text}{level_text}. \
         I'll be asking you some questions today. Let's begin!"
    )
}
