pub mod service;
pub mod session;
pub mod wire;

pub use service::{
    HttpTransport, QuestionService,
    FALLBACK_CONNECTION, FALLBACK_EMPTY, FALLBACK_MISSING_KEY,
};
pub use session::{ChatMessage, ChatSession, PendingQuestion, RequestId, Role};
