//! HTTP gateway for the bid scoring engine.
//!
//! The binary in `main.rs` wires configuration and the authenticator into
//! [`gateway::create_router_with_state`]; integration tests do the same.

pub mod gateway;
