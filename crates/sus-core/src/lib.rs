//! # sus-core
//!
//! Core types shared by every crate of the Unusual Suspects engine.
//!
//! - Entity structs for the game lifecycle (games, investigations, rounds,
//!   eliminations, suspects, questions, descriptions)
//! - Provider and answer-state enums
//! - ID prefix constants
//! - Game rule constants
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod rules;
