//! # NestEgg Ext OpenAI
//!
//! ETF advisor backed by an OpenAI-compatible chat completions API.
//!
//! This crate provides [`OpenAiEtfAdvisor`], an implementation of the
//! [`EtfAdvisor`](nestegg_traits::EtfAdvisor) trait. It sends a fixed prompt
//! asking for ten ETFs near a target return, strips any markdown code fence
//! the model wraps around its answer, and decodes the JSON array.
//!
//! The credential is part of [`OpenAiConfig`] and is handed to the advisor
//! when it is built; nothing is read from the environment here.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod prompt;

pub use client::OpenAiEtfAdvisor;
pub use config::OpenAiConfig;
pub use prompt::{etf_prompt, parse_etf_response, strip_code_fence, REQUESTED_ETF_COUNT};
