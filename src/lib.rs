//! JournalAgent - journal transcription and analysis API
//!
//! This crate provides an HTTP service with two endpoints: one transcribes
//! a remote audio recording using OpenAI Whisper, the other generates a
//! persona-voiced psychological analysis of journal entries using the
//! Anthropic Messages API.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects (journal entries, prompts, audio) and errors
//! - **Application**: Worker use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Whisper, Claude, HTTP fetch)
//! - **Server**: Axum router, request/response shapes, and error mapping

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod server;
