//! # Core Module
//!
//! Data structures for representing molecules as graphs. Everything here is
//! plain owned data with no I/O and no internal locking; callers sharing a
//! [`Molecule`](models::molecule::Molecule) across threads must guard it
//! themselves.

pub mod models;
