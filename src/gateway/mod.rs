mod client;
mod types;

pub use client::{CompletionClient, GatewayClient};
pub use types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, CompletionMessage};
