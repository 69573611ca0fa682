//! Retrieval-augmented document question answering.
//!
//! Uploaded PDF and plain-text files are split into overlapping chunks,
//! embedded through a remote embedding API and persisted in an on-disk
//! vector collection. A conversational pipeline answers questions by
//! retrieving the nearest chunks and forwarding them, together with the
//! conversation history, to a remote chat model.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
