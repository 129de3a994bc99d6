use super::ids::AtomId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MoleculeError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoleculeError {
    #[error("Atom index {index} is out of range for a molecule with {len} atoms")]
    AtomIndexOutOfRange { index: AtomId, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_index_and_length() {
        let err = MoleculeError::AtomIndexOutOfRange {
            index: AtomId::new(5),
            len: 1,
        };
        assert_eq!(
            err.to_string(),
            "Atom index 5 is out of range for a molecule with 1 atoms"
        );
    }
}
