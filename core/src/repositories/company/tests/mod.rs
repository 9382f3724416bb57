//! Tests for the company repository
