use std::env;
use std::fmt;
use std::path::PathBuf;

/// Engine configuration resolved from the environment.
///
/// The engine itself is storage-free; the only external resource it touches
/// is the question-set definition file, whose location lives here so hosting
/// applications configure it the same way.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub questions_path: PathBuf,
    pub log_level: String,
}

impl EngineConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let questions_path = env::var("INTERVIEW_QUESTIONS_PATH")
            .unwrap_or_else(|_| "data/interview-questions.json".to_string());
        if questions_path.trim().is_empty() {
            return Err(ConfigError::EmptyQuestionsPath);
        }

        let log_level = env::var("INTERVIEW_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            questions_path: PathBuf::from(questions_path),
            log_level,
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyQuestionsPath,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyQuestionsPath => {
                write!(f, "INTERVIEW_QUESTIONS_PATH must not be empty")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
