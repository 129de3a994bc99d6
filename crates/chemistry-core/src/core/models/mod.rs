//! # Models Module
//!
//! The molecular graph: atoms, the bonds between them and the molecule that
//! owns both.
//!
//! ## Key Components
//!
//! - [`ids`] - Positional handles ([`AtomId`](ids::AtomId), [`BondId`](ids::BondId))
//! - [`atom`] - A vertex carrying an atomic number and its incident bonds
//! - [`topology`] - A bond joining two atoms
//! - [`molecule`] - The arena owning all atoms and bonds, and its construction API
//! - [`builder`] - Scripted construction with capacity hints
//! - [`error`] - The error raised when a bond names a missing atom
//!
//! ## Usage
//!
//! ```
//! use chemistry::core::models::molecule::Molecule;
//!
//! let mut molecule = Molecule::new("Methane");
//! let carbon = molecule.add_atom(6);
//! for _ in 0..4 {
//!     let hydrogen = molecule.add_atom(1);
//!     molecule.add_bond(carbon, hydrogen)?;
//! }
//!
//! assert_eq!(molecule.atom(carbon).unwrap().degree(), 4);
//! # Ok::<(), chemistry::MoleculeError>(())
//! ```

pub mod atom;
pub mod builder;
pub mod error;
pub mod ids;
pub mod molecule;
pub mod topology;
