use crate::atom::Atom;

/// Represents a molecule
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    pub(crate) atoms: Vec<Atom>,
    /// the formal charge of the molecule
    pub(crate) charge: i32,
}

impl Molecule {
    pub fn new(atoms: Vec<Atom>, charge: i32) -> Self {
        Self { atoms, charge }
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn charge(&self) -> i32 {
        self.charge
    }

    /// Returns a copy of this molecule with a different formal charge
    pub fn with_charge(self, charge: i32) -> Self {
        Self { charge, ..self }
    }

    /// Returns the number of total electrons in the system: the sum of the
    /// nuclear charges minus the molecular charge. Can be zero or negative for
    /// nonsensical charges.
    pub fn n_electrons(&self) -> i64 {
        let base_electron_count = self.atoms.iter().map(Atom::nuclear_charge).sum::<i64>();
        base_electron_count - self.charge as i64
    }
}
