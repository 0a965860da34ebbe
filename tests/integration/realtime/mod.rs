//! Push channel tests

mod broadcast_test;
