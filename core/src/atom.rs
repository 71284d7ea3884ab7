use crate::periodic_table::ElementType;

/// Represents an atom in a molecule.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Atom {
    pub(crate) position: [f64; 3],
    pub(crate) element_type: ElementType,
}

impl Atom {
    pub fn new(element_type: ElementType, position: [f64; 3]) -> Self {
        Self {
            position,
            element_type,
        }
    }

    /// Returns the charge of this nucleus
    pub fn nuclear_charge(&self) -> i64 {
        self.element_type.atomic_number() as i64
    }

    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    pub fn position(&self) -> &[f64; 3] {
        &self.position
    }
}
