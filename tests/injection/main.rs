//! Injection integration tests.
//!
//! These tests drive the sender and the run loop against an in-process HTTP
//! endpoint bound to 127.0.0.1. Each test:
//! 1. Starts a mock endpoint with scripted per-request behaviour
//! 2. Sends one or more messages
//! 3. Checks the classified outcomes, the run statistics and what the
//!    endpoint actually received

mod run_test;
