use super::atom::Atom;
use super::error::{MoleculeError, Result};
use super::ids::{AtomId, BondId};
use super::topology::Bond;
use tracing::{debug, trace};

/// A molecule: the single owner of a set of atoms and the bonds between them.
///
/// Atoms and bonds live in two growable sequences. Every entity is addressed
/// by its position in the sequence it was appended to ([`AtomId`],
/// [`BondId`]), and since nothing is ever removed those handles stay valid
/// for the molecule's whole lifetime. Each atom's incident-bond list stores
/// [`BondId`]s into the same molecule, so the object graph has exactly one
/// owner.
///
/// No chemistry is enforced: atomic numbers are taken as given, and
/// self-bonds and repeated bonds between the same pair are accepted.
#[derive(Debug, Clone, Default)]
pub struct Molecule {
    /// Opaque label, typically the molecule's name.
    identifier: String,
    /// Atoms in creation order.
    atoms: Vec<Atom>,
    /// Bonds in creation order.
    bonds: Vec<Bond>,
}

impl Molecule {
    /// Creates a new, empty molecule.
    ///
    /// # Arguments
    ///
    /// * `identifier` - An opaque label for the molecule, e.g. its name.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self::with_capacity(identifier, 0, 0)
    }

    /// Creates an empty molecule with room for `atoms` atoms and `bonds` bonds
    /// before reallocating.
    pub fn with_capacity(identifier: impl Into<String>, atoms: usize, bonds: usize) -> Self {
        Self {
            identifier: identifier.into(),
            atoms: Vec::with_capacity(atoms),
            bonds: Vec::with_capacity(bonds),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns all atoms in creation order; an atom's position is its [`AtomId`].
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Returns all bonds in creation order; a bond's position is its [`BondId`].
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Retrieves an atom by its handle.
    ///
    /// # Return
    ///
    /// Returns `Some(&Atom)` if the handle is in range, otherwise `None`.
    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id.index())
    }

    /// Retrieves a bond by its handle.
    ///
    /// # Return
    ///
    /// Returns `Some(&Bond)` if the handle is in range, otherwise `None`.
    pub fn bond(&self, id: BondId) -> Option<&Bond> {
        self.bonds.get(id.index())
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    /// Returns `true` if the molecule has no atoms.
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Returns an iterator yielding `(AtomId, &Atom)` pairs in creation order.
    pub fn atoms_iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.atoms
            .iter()
            .enumerate()
            .map(|(index, atom)| (AtomId::new(index), atom))
    }

    /// Returns an iterator yielding `(BondId, &Bond)` pairs in creation order.
    pub fn bonds_iter(&self) -> impl Iterator<Item = (BondId, &Bond)> {
        self.bonds
            .iter()
            .enumerate()
            .map(|(index, bond)| (BondId::new(index), bond))
    }

    /// Returns the bonds incident on an atom, in order of formation.
    ///
    /// # Return
    ///
    /// Returns `None` if the handle is out of range.
    pub fn incident_bonds(&self, atom_id: AtomId) -> Option<&[BondId]> {
        self.atom(atom_id).map(Atom::bonds)
    }

    /// Returns the atoms directly bonded to `atom_id`.
    ///
    /// One entry is produced per incident bond, in order of formation, so
    /// repeated bonds repeat the neighbor and a self-bond yields `atom_id`
    /// itself twice.
    ///
    /// # Return
    ///
    /// Returns `None` if the handle is out of range.
    pub fn neighbors(&self, atom_id: AtomId) -> Option<impl Iterator<Item = AtomId> + '_> {
        let atom = self.atom(atom_id)?;
        Some(
            atom.bonds()
                .iter()
                .filter_map(move |&bond_id| self.bond(bond_id)?.partner(atom_id)),
        )
    }

    /// Adds a new atom and returns its handle.
    ///
    /// The handle equals the number of atoms present before the call. This
    /// never fails; the atomic number is not validated.
    ///
    /// # Arguments
    ///
    /// * `atomic_number` - The atomic number of the new atom.
    pub fn add_atom(&mut self, atomic_number: i32) -> AtomId {
        let atom_id = AtomId::new(self.atoms.len());
        self.atoms.push(Atom::new(atomic_number));
        trace!(
            molecule = %self.identifier,
            atom = %atom_id,
            atomic_number,
            "Added atom"
        );
        atom_id
    }

    /// Adds a bond between two atoms and returns its handle.
    ///
    /// The bond keeps the endpoint order given here and is appended to the
    /// incident-bond list of `atom1_id` and then of `atom2_id`; when both are
    /// the same atom it is therefore listed there twice. Repeated calls with
    /// the same pair create distinct bonds.
    ///
    /// # Arguments
    ///
    /// * `atom1_id` - Handle of the first (source) atom.
    /// * `atom2_id` - Handle of the second (target) atom.
    ///
    /// # Return
    ///
    /// The handle of the new bond, equal to the number of bonds present
    /// before the call.
    ///
    /// # Errors
    ///
    /// Returns [`MoleculeError::AtomIndexOutOfRange`] for the first handle
    /// that is not a position in the atom sequence. The molecule is left
    /// untouched in that case.
    pub fn add_bond(&mut self, atom1_id: AtomId, atom2_id: AtomId) -> Result<BondId> {
        self.check_atom(atom1_id)?;
        self.check_atom(atom2_id)?;

        let bond = self.bond_to(atom1_id, atom2_id);
        trace!(
            molecule = %self.identifier,
            bond = %bond,
            source = %atom1_id,
            target = %atom2_id,
            "Added bond"
        );
        Ok(bond)
    }

    fn check_atom(&self, atom_id: AtomId) -> Result<()> {
        let len = self.atoms.len();
        if atom_id.index() < len {
            return Ok(());
        }
        debug!(
            molecule = %self.identifier,
            atom = %atom_id,
            atom_count = len,
            "Rejected bond to missing atom"
        );
        Err(MoleculeError::AtomIndexOutOfRange {
            index: atom_id,
            len,
        })
    }

    // Both handles must already be in range.
    fn bond_to(&mut self, source: AtomId, target: AtomId) -> BondId {
        let bond_id = BondId::new(self.bonds.len());
        self.atoms[source.index()].attach_bond(bond_id);
        self.atoms[target.index()].attach_bond(bond_id);
        self.bonds.push(Bond::new(source, target));
        bond_id
    }
}
