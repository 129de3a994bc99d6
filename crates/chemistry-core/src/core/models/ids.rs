use std::fmt;

macro_rules! index_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(usize);

        impl $name {
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Returns the zero-based position this handle refers to.
            pub const fn index(self) -> usize {
                self.0
            }
        }

        impl From<usize> for $name {
            fn from(index: usize) -> Self {
                Self(index)
            }
        }

        impl From<$name> for usize {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

index_type! {
    /// Stable handle to an atom: its position in the owning molecule's atom sequence.
    AtomId
}

index_type! {
    /// Stable handle to a bond: its position in the owning molecule's bond sequence.
    BondId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_through_conversions() {
        let id = AtomId::from(7);
        assert_eq!(id.index(), 7);
        assert_eq!(usize::from(id), 7);
        assert_eq!(id, AtomId::new(7));
    }

    #[test]
    fn display_prints_bare_index() {
        assert_eq!(AtomId::new(3).to_string(), "3");
        assert_eq!(BondId::new(12).to_string(), "12");
    }

    #[test]
    fn handles_order_by_position() {
        assert!(BondId::new(1) < BondId::new(2));
        let mut ids = vec![AtomId::new(4), AtomId::new(0), AtomId::new(2)];
        ids.sort();
        assert_eq!(ids, vec![AtomId::new(0), AtomId::new(2), AtomId::new(4)]);
    }
}
