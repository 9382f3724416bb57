//! Domain layer containing entities and their field rules.

pub mod entities;
