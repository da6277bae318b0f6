//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate catalog, dictionary and board mutations into user-intent
//!   level APIs.
//! - Keep UI layers decoupled from storage details.

pub mod engine;
