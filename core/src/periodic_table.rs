use serde::{Deserialize, Serialize};

/// Chemical elements up to krypton. The discriminant is the atomic number.
#[repr(u32)]
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ElementType {
    H = 1, He,
    Li, Be, B, C, N, O, F, Ne,
    Na, Mg, Al, Si, P, S, Cl, Ar,
    K, Ca, Sc, Ti, V, Cr, Mn, Fe, Co, Ni, Cu, Zn, Ga, Ge, As, Se, Br, Kr,
}

impl ElementType {
    pub fn atomic_number(self) -> u32 {
        self as u32
    }
}
