//! Property-based tests for the SMS relay

mod store_proptest;
