use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementKind {
    Distance,
    Angle,
    Dihedral,
}

impl MeasurementKind {
    /// Number of atoms this kind of measurement requires.
    pub fn arity(self) -> usize {
        match self {
            Self::Distance => 2,
            Self::Angle => 3,
            Self::Dihedral => 4,
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::Distance => "Å",
            Self::Angle | Self::Dihedral => "°",
        }
    }
}

#[derive(Debug, Error)]
#[error("Invalid measurement kind: '{0}'")]
pub struct ParseMeasurementKindError(String);

impl FromStr for MeasurementKind {
    type Err = ParseMeasurementKindError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "distance" | "dist" => Ok(Self::Distance),
            "angle" => Ok(Self::Angle),
            "dihedral" | "torsion" => Ok(Self::Dihedral),
            _ => Err(ParseMeasurementKindError(s.to_string())),
        }
    }
}

impl fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Distance => "distance",
                Self::Angle => "angle",
                Self::Dihedral => "dihedral",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub id: String,
    pub kind: MeasurementKind,
    pub atom_indices: Vec<usize>,
    pub value: f64, // Rounded to 2 decimals
    pub unit: String,
    pub visible: bool,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}{}", self.value, self.unit)
    }
}

/// Measurements kept in creation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementSet {
    items: Vec<Measurement>,
}

impl MeasurementSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, measurement: Measurement) {
        self.items.push(measurement);
    }

    pub fn remove(&mut self, id: &str) -> Option<Measurement> {
        let pos = self.items.iter().position(|m| m.id == id)?;
        Some(self.items.remove(pos))
    }

    pub fn get(&self, id: &str) -> Option<&Measurement> {
        self.items.iter().find(|m| m.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Measurement> {
        self.items.iter()
    }

    pub fn visible(&self) -> impl Iterator<Item = &Measurement> {
        self.items.iter().filter(|m| m.visible)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
