//! TeluguScribe - Telugu audio to English text converter
//!
//! This crate sends a local audio clip plus a fixed instruction prompt to
//! Google Gemini and prints or saves the returned English text.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects, the session context, and errors
//! - **Application**: Use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Gemini, key store, config)
//! - **CLI**: Command-line interface and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
