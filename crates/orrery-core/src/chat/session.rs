use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::error::SubmitError;

/// Who wrote a chat entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

/// Correlates an answer with the question that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub u64);

/// A submitted question waiting for its answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuestion {
    pub id: RequestId,
    pub body_name: String,
    pub question: String,
}

/// Source of request ids. Process-wide, so an answer that outlives its
/// session can never match a request from a later one.
static NEXT_REQUEST_ID: AtomicU64 = AtomicU64::new(0);

impl RequestId {
    fn next() -> Self {
        RequestId(NEXT_REQUEST_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Linear chat history for the focused body.
///
/// At most one question is in flight, and every accepted question gets
/// exactly one answer entry. A reset clears the history but not the
/// outstanding request: its answer lands in the new history.
#[derive(Debug, Default)]
pub struct ChatSession {
    history: Vec<ChatMessage>,
    in_flight: Option<RequestId>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// True while an answer is outstanding (the send button is disabled).
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Accept a question: append the user entry and hand back the request
    /// to send. Blank questions and questions submitted while another is in
    /// flight are rejected, never queued.
    pub fn submit(&mut self, body_name: &str, question: &str) -> Result<PendingQuestion, SubmitError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(SubmitError::Empty);
        }
        if self.in_flight.is_some() {
            return Err(SubmitError::Busy);
        }

        let id = RequestId::next();
        self.in_flight = Some(id);
        self.history.push(ChatMessage {
            role: Role::User,
            text: question.to_string(),
        });
        log::debug!("chat: submitted request {} about {body_name}", id.0);

        Ok(PendingQuestion {
            id,
            body_name: body_name.to_string(),
            question: question.to_string(),
        })
    }

    /// Deliver the answer for `id`. Returns true if it was appended.
    pub fn resolve(&mut self, id: RequestId, answer: String) -> bool {
        if self.in_flight != Some(id) {
            log::warn!("chat: answer {} does not match the outstanding request", id.0);
            return false;
        }
        self.in_flight = None;
        self.history.push(ChatMessage {
            role: Role::Model,
            text: answer,
        });
        true
    }

    /// Start over for a newly focused body. An outstanding request keeps
    /// blocking submission until its answer arrives.
    pub fn reset(&mut self) {
        self.history.clear();
    }
}
