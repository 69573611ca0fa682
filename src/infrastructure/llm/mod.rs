mod openai_chat;
mod openai_embedder;

pub use openai_chat::OpenAiChatModel;
pub use openai_embedder::OpenAiEmbedder;
