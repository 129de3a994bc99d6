//! # Chemistry
//!
//! A minimal model of molecules as graphs of atoms connected by bonds.
//!
//! A [`Molecule`] owns every atom and bond it creates. Callers never hold
//! references into it; instead [`Molecule::add_atom`] and
//! [`Molecule::add_bond`] hand back positional handles ([`AtomId`],
//! [`BondId`]) that stay valid for the molecule's lifetime, since nothing is
//! ever removed.
//!
//! The model is deliberately permissive. Atomic numbers are not validated,
//! and self-bonds or repeated bonds between the same pair of atoms are
//! accepted. The only failure is a bond that names an atom the molecule does
//! not have ([`MoleculeError::AtomIndexOutOfRange`]).
//!
//! ```
//! use chemistry::Molecule;
//!
//! let mut mol = Molecule::new("Methane");
//! let carbon = mol.add_atom(6);
//! let hydrogens: Vec<_> = (0..4).map(|_| mol.add_atom(1)).collect();
//! for &hydrogen in &hydrogens {
//!     mol.add_bond(carbon, hydrogen)?;
//! }
//!
//! assert_eq!(mol.atoms().len(), 5);
//! assert_eq!(mol.bonds().len(), 4);
//! # Ok::<(), chemistry::MoleculeError>(())
//! ```

pub mod core;

pub use crate::core::models::atom::Atom;
pub use crate::core::models::builder::MoleculeBuilder;
pub use crate::core::models::error::{MoleculeError, Result};
pub use crate::core::models::ids::{AtomId, BondId};
pub use crate::core::models::molecule::Molecule;
pub use crate::core::models::topology::Bond;
