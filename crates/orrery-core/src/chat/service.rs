//! Question-answer service.
//!
//! Forwards a free-text question about a body to the generative-language
//! endpoint. `ask` never fails: a missing key, a transport error or an empty
//! answer all resolve to a fixed user-facing fallback string.

use std::future::Future;

use crate::config::ExplorerConfig;
use crate::error::AskError;
use super::wire::{Content, GenerateRequest, GenerateResponse, GenerationConfig};

/// Shown when no API key is configured.
pub const FALLBACK_MISSING_KEY: &str =
    "המפתח (API_KEY) לא הוגדר. יש להגדיר אותו במשתני הסביבה ולטעון מחדש את האתר.";
/// Shown on network, HTTP or decode failure.
pub const FALLBACK_CONNECTION: &str =
    "חלה שגיאה בחיבור לבינה המלאכותית. ודאו שהמפתח הוגדר כראוי ונסו שוב.";
/// Shown when the service answered with no text.
pub const FALLBACK_EMPTY: &str = "מצטער, לא הצלחתי למצוא תשובה כרגע.";

const SYSTEM_INSTRUCTION: &str =
    "ענה בעברית בלבד. היה מדויק מדעית. אם השאלה היא על סדרי גודל, השתמש בדוגמאות מחיי היום יום.";

/// Minimal async HTTP surface the service needs. The browser build
/// implements it with `fetch`; tests use canned responses.
pub trait HttpTransport {
    /// POST `body` as JSON and return the response text.
    /// Non-2xx statuses must come back as `AskError::Status`.
    fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: String,
    ) -> impl Future<Output = Result<String, AskError>>;
}

impl AskError {
    /// The fixed message appended to the chat for this failure.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            AskError::MissingCredential => FALLBACK_MISSING_KEY,
            AskError::EmptyResponse => FALLBACK_EMPTY,
            AskError::Transport(_) | AskError::Status { .. } | AskError::Decode(_) => {
                FALLBACK_CONNECTION
            }
        }
    }
}

/// Settings for talking to the generative-language endpoint.
#[derive(Debug, Clone)]
pub struct QuestionService {
    api_key: Option<String>,
    endpoint: String,
    model: String,
    temperature: f32,
}

impl QuestionService {
    pub fn new(api_key: Option<String>, endpoint: impl Into<String>, model: impl Into<String>, temperature: f32) -> Self {
        Self {
            api_key,
            endpoint: endpoint.into(),
            model: model.into(),
            temperature,
        }
    }

    pub fn from_config(config: &ExplorerConfig) -> Self {
        Self::new(
            config.api_key.clone(),
            config.endpoint.clone(),
            config.model.clone(),
            config.temperature,
        )
    }

    /// The key, if it is usable. Bundlers substitute a literal "undefined"
    /// for unset variables, which counts as missing.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty() && *k != "undefined")
    }

    pub fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }

    pub fn build_request(&self, body_name: &str, question: &str) -> GenerateRequest {
        let prompt = format!(
            "You are a planetary scientist expert. The user is exploring a solar system simulation.\n\
             The planet being discussed is: {body_name}.\n\
             Answer the following question in Hebrew concisely (max 3 sentences): {question}"
        );
        GenerateRequest {
            contents: vec![Content::user(prompt)],
            system_instruction: Some(Content::system(SYSTEM_INSTRUCTION)),
            generation_config: GenerationConfig {
                temperature: self.temperature,
            },
        }
    }

    /// Ask and return either the answer or the matching fallback message.
    pub async fn ask<T: HttpTransport>(&self, transport: &T, body_name: &str, question: &str) -> String {
        match self.try_ask(transport, body_name, question).await {
            Ok(answer) => answer,
            Err(AskError::MissingCredential) => {
                log::warn!("question-answer: no API key configured");
                FALLBACK_MISSING_KEY.to_string()
            }
            Err(e) => {
                log::error!("question-answer: {e}");
                e.fallback_message().to_string()
            }
        }
    }

    /// Like `ask`, but surfaces the failure.
    pub async fn try_ask<T: HttpTransport>(
        &self,
        transport: &T,
        body_name: &str,
        question: &str,
    ) -> Result<String, AskError> {
        let key = self.credential().ok_or(AskError::MissingCredential)?;
        let request = self.build_request(body_name, question);
        let body = serde_json::to_string(&request)?;
        let headers = [("Content-Type", "application/json"), ("x-goog-api-key", key)];

        let raw = transport.post_json(&self.url(), &headers, body).await?;
        GenerateResponse::from_json(&raw)?
            .text()
            .ok_or(AskError::EmptyResponse)
    }
}
