//! Utility helpers isolating browser/environment concerns.

pub mod persistence;
