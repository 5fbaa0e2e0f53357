//! Domain model: loan terms, money value objects, the installment
//! arithmetic, and the port through which decisions leave the process.

pub mod calculator;
pub mod decision;
pub mod loan;
pub mod message;
pub mod money;
pub mod ports;
