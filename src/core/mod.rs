pub mod gemini;
pub mod session;

pub use gemini::{GeminiClient, GeminiSession};
pub use session::{ChatService, ChatSession, Reply};
