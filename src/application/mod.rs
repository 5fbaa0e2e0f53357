//! Application layer orchestrating the loan decision flow.
//!
//! `evaluator` holds the pure decision rule. `processor` drives it per queue
//! message, publishes through the injected `ResultPublisher` port and
//! reports one outcome per message so the host can pick its retry policy.

pub mod evaluator;
pub mod processor;
