//! Reusable operations shared between commands

pub mod scan;
