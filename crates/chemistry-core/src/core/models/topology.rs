use super::ids::AtomId;

/// An edge of the molecular graph joining exactly two atoms.
///
/// The endpoints keep the order they were given at creation (`source`,
/// then `target`) although the relationship itself is undirected. A bond
/// never changes after it is created.
#[derive(Debug, Clone, Copy)]
pub struct Bond {
    atom1_id: AtomId, // source side
    atom2_id: AtomId, // target side
}

impl Bond {
    pub fn new(atom1_id: AtomId, atom2_id: AtomId) -> Self {
        Self { atom1_id, atom2_id }
    }

    /// Returns both endpoints in creation order.
    pub fn atoms(&self) -> (AtomId, AtomId) {
        (self.atom1_id, self.atom2_id)
    }

    pub fn source(&self) -> AtomId {
        self.atom1_id
    }

    pub fn target(&self) -> AtomId {
        self.atom2_id
    }

    pub fn contains(&self, atom_id: AtomId) -> bool {
        self.atom1_id == atom_id || self.atom2_id == atom_id
    }

    /// Returns the endpoint opposite `atom_id`, or `None` if the bond does
    /// not touch it. A self-bond is its own partner.
    pub fn partner(&self, atom_id: AtomId) -> Option<AtomId> {
        if self.atom1_id == atom_id {
            Some(self.atom2_id)
        } else if self.atom2_id == atom_id {
            Some(self.atom1_id)
        } else {
            None
        }
    }

    pub fn is_self_bond(&self) -> bool {
        self.atom1_id == self.atom2_id
    }
}
