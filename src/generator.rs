use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::quiz::{Quiz, QuizError, OPTIONS_PER_QUESTION};
use crate::runtime::Event;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(90);

/// One generation attempt, tagged with the id the controller uses to discard
/// results that resolve after the user has navigated away.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    pub request_id: u64,
    pub topic: String,
    pub count: usize,
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("no api key configured, set {API_KEY_ENV}")]
    MissingApiKey,
    #[error("provider returned status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("provider response contained no quiz payload")]
    EmptyResponse,
    #[error("quiz payload was not valid json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] QuizError),
}

/// Boundary to the external generative content provider: a single
/// request/response call from (topic, question count) to a validated quiz.
pub trait QuizGenerator: Send + Sync {
    fn generate(&self, topic: &str, count: usize) -> Result<Quiz, GenerateError>;
}

#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
}

impl GeneratorConfig {
    /// Transport settings come from the config file; the credential only
    /// ever from the environment.
    pub fn from_env(base_url: String, model: String) -> Self {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());
        Self {
            base_url,
            api_key,
            model,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

/// Production gateway calling the Gemini `generateContent` endpoint.
pub struct GeminiGenerator {
    client: reqwest::blocking::Client,
    config: GeneratorConfig,
}

impl GeminiGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());
        Self { client, config }
    }

    pub fn has_api_key(&self) -> bool {
        self.config.api_key.is_some()
    }
}

impl QuizGenerator for GeminiGenerator {
    fn generate(&self, topic: &str, count: usize) -> Result<Quiz, GenerateError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GenerateError::MissingApiKey)?;

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        );

        let payload = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(build_prompt(topic, count)),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: quiz_response_schema(),
            },
        };

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", api_key)
            .json(&payload)
            .send()?;

        if !response.status().is_success() {
            return Err(GenerateError::HttpStatus(response.status()));
        }

        let body: GenerateContentResponse = response.json()?;
        let text = extract_text(body).ok_or(GenerateError::EmptyResponse)?;
        parse_quiz(&text)
    }
}

/// Run one generation attempt on a worker thread, posting the outcome into
/// the main event channel. The controller decides whether the result is
/// still wanted when it arrives.
pub fn spawn_generation(
    generator: Arc<dyn QuizGenerator>,
    request: GenerationRequest,
    tx: Sender<Event>,
) {
    thread::spawn(move || {
        tracing::info!(
            request_id = request.request_id,
            topic = %request.topic,
            count = request.count,
            "requesting quiz generation"
        );

        let result = generator.generate(&request.topic, request.count);

        if let Err(ref err) = result {
            tracing::error!(request_id = request.request_id, error = %err, "quiz generation failed");
        }

        // The receiver is gone only when the app is shutting down.
        let _ = tx.send(Event::Generated {
            request_id: request.request_id,
            result,
        });
    });
}

fn build_prompt(topic: &str, count: usize) -> String {
    format!(
        "Generate a high-quality, engaging quiz about \"{topic}\". \
         The quiz should have exactly {count} challenging multiple-choice questions. \
         Each question should have {OPTIONS_PER_QUESTION} options and a detailed \
         explanation of the correct answer."
    )
}

/// JSON schema sent alongside the prompt so the provider emits the document
/// shape directly instead of prose.
fn quiz_response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "category": { "type": "STRING" },
            "questions": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "STRING" },
                        "question": { "type": "STRING" },
                        "options": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "correctAnswerIndex": { "type": "INTEGER" },
                        "explanation": { "type": "STRING" }
                    },
                    "required": ["id", "question", "options", "correctAnswerIndex", "explanation"]
                }
            }
        },
        "required": ["title", "category", "questions"]
    })
}

fn parse_quiz(text: &str) -> Result<Quiz, GenerateError> {
    let quiz: Quiz = serde_json::from_str(text)?;
    quiz.validate()?;
    Ok(quiz)
}

fn extract_text(response: GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn prompt_names_topic_and_count() {
        let prompt = build_prompt("Space Exploration", 15);
        assert!(prompt.contains("Space Exploration"));
        assert!(prompt.contains("15"));
    }

    #[test]
    fn parse_quiz_accepts_valid_document() {
        let text = r#"{
            "title": "Rust",
            "category": "Programming",
            "questions": [{
                "id": "q1",
                "question": "What does the borrow checker enforce?",
                "options": ["Aliasing xor mutation", "Garbage collection", "Dynamic typing", "Reflection"],
                "correctAnswerIndex": 0,
                "explanation": "References must not alias while mutated."
            }]
        }"#;

        let quiz = parse_quiz(text).unwrap();
        assert_eq!(quiz.title, "Rust");
        assert_eq!(quiz.len(), 1);
    }

    #[test]
    fn parse_quiz_rejects_invalid_json() {
        assert_matches!(parse_quiz("not json"), Err(GenerateError::Parse(_)));
    }

    #[test]
    fn parse_quiz_rejects_out_of_range_answer() {
        let text = r#"{
            "title": "T",
            "category": "C",
            "questions": [{
                "id": "q1",
                "question": "?",
                "options": ["a", "b", "c", "d"],
                "correctAnswerIndex": 9,
                "explanation": "e"
            }]
        }"#;

        assert_matches!(
            parse_quiz(text),
            Err(GenerateError::Invalid(QuizError::AnswerOutOfRange { .. }))
        );
    }

    #[test]
    fn extract_text_walks_first_candidate() {
        let body = r#"{
            "candidates": [
                { "content": { "parts": [ { "text": "payload" } ] } }
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(extract_text(response), Some("payload".to_string()));
    }

    #[test]
    fn extract_text_handles_empty_response() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(extract_text(response), None);
    }

    #[test]
    fn generate_without_api_key_fails_fast() {
        let generator = GeminiGenerator::new(GeneratorConfig::default());
        assert!(!generator.has_api_key());
        assert_matches!(
            generator.generate("Space", 5),
            Err(GenerateError::MissingApiKey)
        );
    }

    #[test]
    fn response_schema_requires_document_fields() {
        let schema = quiz_response_schema();
        let required = schema["required"].as_array().unwrap();
        assert!(required.iter().any(|v| v == "questions"));
        assert_eq!(
            schema["properties"]["questions"]["items"]["required"]
                .as_array()
                .unwrap()
                .len(),
            5
        );
    }
}
