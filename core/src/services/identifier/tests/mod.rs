//! Tests for identifier allocation
