use crate::core::elements::LennardJonesData;

#[inline]
pub fn harmonic_bond(dist: f64, equilibrium: f64, force_constant: f64) -> f64 {
    let stretch = dist - equilibrium;
    0.5 * force_constant * stretch * stretch
}

/// Magnitude of the restoring force of [`harmonic_bond`], positive when stretched.
#[inline]
pub fn harmonic_bond_force(dist: f64, equilibrium: f64, force_constant: f64) -> f64 {
    force_constant * (dist - equilibrium)
}

#[inline]
pub fn lennard_jones_12_6(dist: f64, sigma: f64, epsilon: f64) -> f64 {
    let ratio = sigma / dist;
    let ratio6 = ratio.powi(6);
    let ratio12 = ratio6 * ratio6;
    4.0 * epsilon * (ratio12 - ratio6)
}

/// Lorentz-Berthelot mixing: arithmetic mean of sigma, geometric mean of epsilon.
#[inline]
pub fn combine_lennard_jones(a: LennardJonesData, b: LennardJonesData) -> LennardJonesData {
    LennardJonesData {
        sigma: (a.sigma + b.sigma) / 2.0,
        epsilon: (a.epsilon * b.epsilon).sqrt(),
    }
}
