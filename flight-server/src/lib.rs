//! Flight path tracker server.
//!
//! A web service that answers: "given the legs of someone's journey in
//! any order, where did they start and where did they end up?"

pub mod config;
pub mod decode;
pub mod domain;
pub mod resolver;
pub mod web;
