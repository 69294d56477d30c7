//! Game implementations.

pub mod hanabi;
