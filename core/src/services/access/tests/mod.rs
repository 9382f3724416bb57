//! Tests for the access gate
