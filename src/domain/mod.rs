//! Domain model: payment requests and outcomes, validation rules, the bank's wire types
//! and the ports the application layer depends on.

pub mod bank;
pub mod payment;
pub mod ports;
pub mod validator;
