use super::ids::BondId;

/// Represents an atom: a vertex of the molecular graph.
///
/// An atom carries its atomic number and the handles of the bonds incident
/// on it, in the order those bonds were formed. Atoms are owned by a
/// [`Molecule`](super::molecule::Molecule) and only change when the molecule
/// forms a new bond to them.
#[derive(Debug, Clone)]
pub struct Atom {
    /// The atomic number (proton count). Not validated.
    atomic_number: i32,
    /// Incident bonds, in order of formation.
    bonds: Vec<BondId>,
}

impl Atom {
    /// Creates a new `Atom` with no incident bonds.
    ///
    /// Any value is accepted for `atomic_number`, including zero, negative
    /// and non-physical values.
    ///
    /// # Arguments
    ///
    /// * `atomic_number` - The element's atomic number.
    pub fn new(atomic_number: i32) -> Self {
        Self {
            atomic_number,
            bonds: Vec::new(),
        }
    }

    pub fn atomic_number(&self) -> i32 {
        self.atomic_number
    }

    /// Returns the bonds incident on this atom, in order of formation.
    ///
    /// A self-bond is listed twice, once for each of its endpoints.
    pub fn bonds(&self) -> &[BondId] {
        &self.bonds
    }

    /// Returns the number of incident-bond entries.
    pub fn degree(&self) -> usize {
        self.bonds.len()
    }

    /// Records `bond` as incident on this atom.
    ///
    /// No checks are performed; the same bond may be attached more than once.
    pub(crate) fn attach_bond(&mut self, bond: BondId) {
        self.bonds.push(bond);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_has_no_bonds() {
        let atom = Atom::new(6);
        assert_eq!(atom.atomic_number(), 6);
        assert!(atom.bonds().is_empty());
        assert_eq!(atom.degree(), 0);
    }

    #[test]
    fn new_atom_accepts_non_physical_atomic_numbers() {
        assert_eq!(Atom::new(0).atomic_number(), 0);
        assert_eq!(Atom::new(-3).atomic_number(), -3);
        assert_eq!(Atom::new(i32::MAX).atomic_number(), i32::MAX);
    }

    #[test]
    fn attach_bond_appends_in_order() {
        let mut atom = Atom::new(1);
        atom.attach_bond(BondId::new(2));
        atom.attach_bond(BondId::new(0));
        atom.attach_bond(BondId::new(2));
        assert_eq!(
            atom.bonds(),
            &[BondId::new(2), BondId::new(0), BondId::new(2)]
        );
        assert_eq!(atom.degree(), 3);
    }
}
