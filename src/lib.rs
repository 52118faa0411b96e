//! # Docbrief
//!
//! A document ingestion and summarization pipeline for hosted LLM endpoints.
//!
//! Docbrief takes a document (PDF or DOCX) or pasted text, extracts plain
//! text, and produces a summary through an OpenAI-compatible chat-completions
//! endpoint. Repeated requests for the same text and density within one
//! process are served from an in-memory TTL cache instead of calling the
//! service again; the cache is not shared across runs.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌──────────┐   ┌───────────┐   ┌──────────┐
//! │  Upload  │──▶│ Extract  │──▶│  Resolve   │──▶│  Cache   │
//! │ PDF/DOCX │   │ to text  │   │ vs pasted │   │ TTL 1h   │
//! └──────────┘   └──────────┘   └───────────┘   └────┬─────┘
//!                                                    │ miss
//!                                                    ▼
//!                                              ┌──────────┐
//!                                              │  Hosted  │
//!                                              │   LLM    │
//!                                              └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! export OPENAI_API_KEY=...
//! brief summarize --file report.pdf            # summarize a document
//! brief summarize --text "..." --density concise
//! brief extract --file report.docx             # just the extracted text
//! brief check                                  # verify config + credentials
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core data types |
//! | [`extract`] | PDF / DOCX text extraction |
//! | [`session`] | Session state and input resolution |
//! | [`cache`] | TTL cache for summary results |
//! | [`prompt`] | Fixed prompt templates |
//! | [`summarize`] | Hosted LLM client |
//! | [`pipeline`] | Submit orchestration |
//! | [`stats`] | Input text metrics |
//! | [`progress`] | Phase reporting on stderr |

pub mod cache;
pub mod config;
pub mod extract;
pub mod models;
pub mod pipeline;
pub mod progress;
pub mod prompt;
pub mod session;
pub mod stats;
pub mod summarize;
