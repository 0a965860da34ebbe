//! HTTP API tests

mod sms_test;
