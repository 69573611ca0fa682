use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

/// Append-only conversation buffer for one session.
///
/// Growth is unbounded; there is no truncation or token budgeting. The
/// buffer is cleared only by an explicit reset.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    turns: Vec<ConversationTurn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }
}

#[derive(Debug, Clone)]
pub struct ConversationTurn {
    pub role: TurnRole,
    pub content: String,
    /// Chunks cited by an assistant turn; empty for user turns.
    pub sources: Vec<CitedChunk>,
    pub created_at: DateTime<Utc>,
}

impl ConversationTurn {
    pub fn user(content: String) -> Self {
        Self {
            role: TurnRole::User,
            content,
            sources: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn assistant(content: String, sources: Vec<CitedChunk>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content,
            sources,
            created_at: Utc::now(),
        }
    }
}

/// A retrieved chunk attached to an answer.
#[derive(Debug, Clone)]
pub struct CitedChunk {
    pub text: String,
    pub source: String,
    pub page: Option<u32>,
    pub score: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnRole {
    User,
    Assistant,
}

impl TurnRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnRole::User => "user",
            TurnRole::Assistant => "assistant",
        }
    }
}

impl FromStr for TurnRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(TurnRole::User),
            "assistant" => Ok(TurnRole::Assistant),
            _ => Err(format!("invalid turn role: {}", s)),
        }
    }
}

impl fmt::Display for TurnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
