//! Integration tests for jefit-digest

mod cli_test;
mod helpers;
