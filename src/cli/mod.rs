//! CLI infrastructure for the oxo binary
//!
//! This module provides the command-line interface for playing interactive
//! games and analyzing positions. It is presentation glue only; the engine
//! modules have no knowledge of it.

pub mod commands;
pub mod output;
