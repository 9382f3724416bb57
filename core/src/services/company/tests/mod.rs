//! Tests for the company service

#[cfg(test)]
mod service_tests;
#[cfg(test)]
mod scenario_tests;
