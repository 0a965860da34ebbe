//! Integration tests for the SMS relay

#[path = "../common/mod.rs"]
mod common;

mod api;
mod realtime;
