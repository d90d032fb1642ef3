//! Adapters for the domain ports: the in-memory payment store and the HTTP bank client.

pub mod bank_client;
pub mod in_memory;
