use super::pdb::PdbFile;
use crate::core::models::ids::{IdGenerator, UuidGenerator};
use crate::core::models::molecule::Molecule;

/// Caffeine in fixed-column form: 14 heavy atoms with explicit `CONECT` records.
pub const CAFFEINE_PDB: &str = r#"HEADER    DEMO MOLECULE - CAFFEINE
ATOM      1  N1  CAF A   1       1.320   0.530   0.000  1.00  0.00           N
ATOM      2  C2  CAF A   1       1.980   1.520   0.000  1.00  0.00           C
ATOM      3  N3  CAF A   1       1.370   2.610   0.000  1.00  0.00           N
ATOM      4  C4  CAF A   1       0.040   2.580   0.000  1.00  0.00           C
ATOM      5  C5  CAF A   1      -0.660   1.520   0.000  1.00  0.00           C
ATOM      6  C6  CAF A   1       0.000   0.380   0.000  1.00  0.00           C
ATOM      7  N7  CAF A   1      -2.010   1.780   0.000  1.00  0.00           N
ATOM      8  C8  CAF A   1      -2.170   3.000   0.000  1.00  0.00           C
ATOM      9  N9  CAF A   1      -0.880   3.510   0.000  1.00  0.00           N
ATOM     10  O2  CAF A   1       3.200   1.500   0.000  1.00  0.00           O
ATOM     11  O6  CAF A   1      -0.530  -0.750   0.000  1.00  0.00           O
ATOM     12  C10 CAF A   1       2.010  -0.630   0.000  1.00  0.00           C
ATOM     13  C11 CAF A   1       2.070   3.850   0.000  1.00  0.00           C
ATOM     14  C12 CAF A   1      -3.050   0.790   0.000  1.00  0.00           C
CONECT    1    2    6   12
CONECT    2    1    3   10
CONECT    3    2    4   13
CONECT    4    3    5    9
CONECT    5    4    6    7
CONECT    6    1    5   11
CONECT    7    5    8   14
CONECT    8    7    9
CONECT    9    4    8
END
"#;

impl Molecule {
    /// The built-in caffeine demo structure.
    pub fn demo_caffeine() -> Self {
        Self::demo_caffeine_with(&UuidGenerator)
    }

    pub fn demo_caffeine_with(ids: &dyn IdGenerator) -> Self {
        PdbFile::parse_records(CAFFEINE_PDB, "Caffeine", ids)
    }
}
