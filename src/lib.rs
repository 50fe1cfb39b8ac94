//! Screen Scout - Conversational Media Discovery
//!
//! This crate implements the intent-routing and multi-provider aggregation
//! engine behind a chat-based media discovery product.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
