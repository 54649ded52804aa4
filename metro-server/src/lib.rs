//! Metro route finder server.
//!
//! A web application that answers: "I'm at this metro station,
//! which stations do I pass through to reach my destination?"

pub mod cache;
pub mod dataset;
pub mod domain;
pub mod graph;
pub mod routing;
pub mod web;
