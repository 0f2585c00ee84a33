use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Energy split by contribution, in kcal/mol.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnergyBreakdown {
    pub bond: f64,
    pub vdw: f64,
}

impl EnergyBreakdown {
    pub fn new(bond: f64, vdw: f64) -> Self {
        Self { bond, vdw }
    }

    #[inline]
    pub fn total(&self) -> f64 {
        self.bond + self.vdw
    }
}

impl Add for EnergyBreakdown {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            bond: self.bond + rhs.bond,
            vdw: self.vdw + rhs.vdw,
        }
    }
}

impl AddAssign for EnergyBreakdown {
    fn add_assign(&mut self, rhs: Self) {
        self.bond += rhs.bond;
        self.vdw += rhs.vdw;
    }
}

impl Sum for EnergyBreakdown {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, e| acc + e)
    }
}

impl fmt::Display for EnergyBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total {:.4} kcal/mol (bond {:.4}, vdw {:.4})",
            self.total(),
            self.bond,
            self.vdw
        )
    }
}
