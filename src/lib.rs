//! Adaptive interview question engine.
//!
//! A per-(domain, level) directed graph of interview questions where the edge
//! taken out of each node is decided by keyword analysis of the candidate's
//! free-text answer. The crate is a pure, synchronous library: callers own
//! storage, transport, and the pacing of the interview; every exposed
//! operation is a total function over its inputs.

pub mod config;
pub mod interview;
