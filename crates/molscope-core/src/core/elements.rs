//! Static per-element parameters used for display, connectivity inference and the
//! simplified non-bonded potential.
//!
//! Lookups never fail: an unknown symbol resolves to [`DEFAULT_ELEMENT`], and an
//! element without Lennard-Jones data uses [`DEFAULT_LJ`].

use phf::{Map, phf_map};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementData {
    /// Display color as a `#RRGGBB` string.
    pub color: &'static str,
    /// Display radius in Angstroms, also used as the covalent radius surrogate.
    pub radius: f64,
    /// Atomic mass in g/mol.
    pub mass: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LennardJonesData {
    /// Contact distance in Angstroms.
    pub sigma: f64,
    /// Well depth in kcal/mol.
    pub epsilon: f64,
}

/// The complete parameter set resolved for one element symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementParams {
    pub color: &'static str,
    pub radius: f64,
    pub mass: f64,
    pub sigma: f64,
    pub epsilon: f64,
}

pub const DEFAULT_ELEMENT: ElementData = ElementData {
    color: "#FF69B4",
    radius: 1.0,
    mass: 1.0,
};

pub const DEFAULT_LJ: LennardJonesData = LennardJonesData {
    sigma: 3.0,
    epsilon: 0.1,
};

static ELEMENT_DATA: Map<&'static str, ElementData> = phf_map! {
    "H" => ElementData { color: "#FFFFFF", radius: 0.31, mass: 1.008 },
    "He" => ElementData { color: "#D9FFFF", radius: 0.28, mass: 4.003 },
    "Li" => ElementData { color: "#CC80FF", radius: 1.28, mass: 6.941 },
    "Be" => ElementData { color: "#C2FF00", radius: 0.96, mass: 9.012 },
    "B" => ElementData { color: "#FFB5B5", radius: 0.84, mass: 10.81 },
    "C" => ElementData { color: "#909090", radius: 0.76, mass: 12.01 },
    "N" => ElementData { color: "#3050F8", radius: 0.71, mass: 14.01 },
    "O" => ElementData { color: "#FF0D0D", radius: 0.66, mass: 16.00 },
    "F" => ElementData { color: "#90E050", radius: 0.57, mass: 19.00 },
    "Ne" => ElementData { color: "#B3E3F5", radius: 0.58, mass: 20.18 },
    "Na" => ElementData { color: "#AB5CF2", radius: 1.66, mass: 22.99 },
    "Mg" => ElementData { color: "#8AFF00", radius: 1.41, mass: 24.31 },
    "Al" => ElementData { color: "#BFA6A6", radius: 1.21, mass: 26.98 },
    "Si" => ElementData { color: "#F0C8A0", radius: 1.11, mass: 28.09 },
    "P" => ElementData { color: "#FF8000", radius: 1.07, mass: 30.97 },
    "S" => ElementData { color: "#FFFF30", radius: 1.05, mass: 32.07 },
    "Cl" => ElementData { color: "#1FF01F", radius: 1.02, mass: 35.45 },
    "Ar" => ElementData { color: "#80D1E3", radius: 1.06, mass: 39.95 },
    "K" => ElementData { color: "#8F40D4", radius: 2.03, mass: 39.10 },
    "Ca" => ElementData { color: "#3DFF00", radius: 1.76, mass: 40.08 },
    "Fe" => ElementData { color: "#E06633", radius: 1.32, mass: 55.85 },
    "Co" => ElementData { color: "#F090A0", radius: 1.26, mass: 58.93 },
    "Ni" => ElementData { color: "#50D050", radius: 1.24, mass: 58.69 },
    "Cu" => ElementData { color: "#C88033", radius: 1.32, mass: 63.55 },
    "Zn" => ElementData { color: "#7D80B0", radius: 1.22, mass: 65.38 },
    "Br" => ElementData { color: "#A62929", radius: 1.20, mass: 79.90 },
    "I" => ElementData { color: "#940094", radius: 1.39, mass: 126.9 },
};

static LJ_DATA: Map<&'static str, LennardJonesData> = phf_map! {
    "H" => LennardJonesData { sigma: 2.5, epsilon: 0.02 },
    "C" => LennardJonesData { sigma: 3.4, epsilon: 0.086 },
    "N" => LennardJonesData { sigma: 3.25, epsilon: 0.17 },
    "O" => LennardJonesData { sigma: 3.0, epsilon: 0.21 },
    "S" => LennardJonesData { sigma: 3.55, epsilon: 0.25 },
    "P" => LennardJonesData { sigma: 3.74, epsilon: 0.20 },
    "Fe" => LennardJonesData { sigma: 2.91, epsilon: 0.013 },
};

pub fn element_data(symbol: &str) -> ElementData {
    ELEMENT_DATA.get(symbol).copied().unwrap_or(DEFAULT_ELEMENT)
}

pub fn lennard_jones_data(symbol: &str) -> LennardJonesData {
    LJ_DATA.get(symbol).copied().unwrap_or(DEFAULT_LJ)
}

pub fn element_params(symbol: &str) -> ElementParams {
    let data = element_data(symbol);
    let lj = lennard_jones_data(symbol);
    ElementParams {
        color: data.color,
        radius: data.radius,
        mass: data.mass,
        sigma: lj.sigma,
        epsilon: lj.epsilon,
    }
}

pub fn is_known_element(symbol: &str) -> bool {
    ELEMENT_DATA.contains_key(symbol)
}

/// Normalizes an element token to title case (`"CL"` becomes `"Cl"`).
pub fn normalize_symbol(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_element_returns_table_entry() {
        let carbon = element_data("C");
        assert_eq!(carbon.color, "#909090");
        assert_eq!(carbon.radius, 0.76);
        assert_eq!(carbon.mass, 12.01);
    }

    #[test]
    fn unknown_element_falls_back_to_default_entry() {
        let params = element_params("Xx");
        assert_eq!(params.color, DEFAULT_ELEMENT.color);
        assert_eq!(params.radius, DEFAULT_ELEMENT.radius);
        assert_eq!(params.mass, DEFAULT_ELEMENT.mass);
        assert_eq!(params.sigma, DEFAULT_LJ.sigma);
        assert_eq!(params.epsilon, DEFAULT_LJ.epsilon);
        assert!(!is_known_element("Xx"));
    }

    #[test]
    fn known_element_without_lj_entry_uses_default_lj() {
        let params = element_params("Cl");
        assert_eq!(params.radius, 1.02);
        assert_eq!(params.sigma, DEFAULT_LJ.sigma);
        assert_eq!(params.epsilon, DEFAULT_LJ.epsilon);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(is_known_element("Cl"));
        assert!(!is_known_element("CL"));
    }

    #[test]
    fn normalize_symbol_produces_title_case() {
        assert_eq!(normalize_symbol("CL"), "Cl");
        assert_eq!(normalize_symbol("fe"), "Fe");
        assert_eq!(normalize_symbol("n"), "N");
        assert_eq!(normalize_symbol(""), "");
    }
}
