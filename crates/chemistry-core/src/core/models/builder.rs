use super::error::Result;
use super::ids::AtomId;
use super::molecule::Molecule;
use tracing::{debug, instrument};

/// Collects capacity hints and an ordered list of atoms and bonds, then
/// materialises them into a [`Molecule`].
///
/// Bonds refer to atoms by the handle [`Molecule::add_atom`] will assign,
/// i.e. the zero-based order in which atoms were scripted.
///
/// ```
/// use chemistry::MoleculeBuilder;
///
/// let methane = MoleculeBuilder::new("Methane")
///     .atoms([6, 1, 1, 1, 1])
///     .bond(0, 1)
///     .bond(0, 2)
///     .bond(0, 3)
///     .bond(0, 4)
///     .build()?;
///
/// assert_eq!(methane.atom_count(), 5);
/// assert_eq!(methane.bond_count(), 4);
/// # Ok::<(), chemistry::MoleculeError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MoleculeBuilder {
    identifier: String,
    atom_capacity: Option<usize>,
    bond_capacity: Option<usize>,
    atoms: Vec<i32>,
    bonds: Vec<(AtomId, AtomId)>,
}

impl MoleculeBuilder {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    /// Reserves room for `capacity` atoms. Defaults to the number of scripted atoms.
    pub fn atom_capacity(mut self, capacity: usize) -> Self {
        self.atom_capacity = Some(capacity);
        self
    }

    /// Reserves room for `capacity` bonds. Defaults to the number of scripted bonds.
    pub fn bond_capacity(mut self, capacity: usize) -> Self {
        self.bond_capacity = Some(capacity);
        self
    }

    pub fn atom(mut self, atomic_number: i32) -> Self {
        self.atoms.push(atomic_number);
        self
    }

    pub fn atoms(mut self, atomic_numbers: impl IntoIterator<Item = i32>) -> Self {
        self.atoms.extend(atomic_numbers);
        self
    }

    /// Scripts a bond between the atoms at positions `atom1` and `atom2`.
    pub fn bond(mut self, atom1: usize, atom2: usize) -> Self {
        self.bonds.push((AtomId::new(atom1), AtomId::new(atom2)));
        self
    }

    /// Builds the molecule by replaying every scripted atom, then every
    /// scripted bond, in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoleculeError::AtomIndexOutOfRange`](super::error::MoleculeError::AtomIndexOutOfRange)
    /// raised by [`Molecule::add_bond`].
    #[instrument(level = "debug", skip_all, fields(molecule = %self.identifier))]
    pub fn build(self) -> Result<Molecule> {
        let mut molecule = Molecule::with_capacity(
            self.identifier,
            self.atom_capacity.unwrap_or(self.atoms.len()),
            self.bond_capacity.unwrap_or(self.bonds.len()),
        );

        for atomic_number in self.atoms {
            molecule.add_atom(atomic_number);
        }
        for (atom1, atom2) in self.bonds {
            molecule.add_bond(atom1, atom2)?;
        }

        debug!(
            atoms = molecule.atom_count(),
            bonds = molecule.bond_count(),
            "Built molecule"
        );
        Ok(molecule)
    }
}
