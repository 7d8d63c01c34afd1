//! Protein concentration from a Bradford standard curve and molecular weight of a
//! peptide from its one-letter sequence.
use crate::Calculators::formula_api::{CalcOutput, FormulaSolver, Quantity};
use crate::UnitConversion::display_format::format_fixed;
use crate::Utils::parse_input::{FieldReader, strip_whitespace};
use crate::errors::{CalcError, ensure_finite};
use log::warn;

/// Bradford assay: concentration = (A595 - intercept) / slope · dilution factor, in μg/mL.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BradfordAssay {
    pub absorbance: f64,
    /// of the standard curve, absorbance per μg/mL
    pub slope: f64,
    pub intercept: f64,
    pub dilution_factor: f64,
}

impl BradfordAssay {
    pub fn new(absorbance: f64, slope: f64, intercept: f64, dilution_factor: f64) -> Self {
        Self {
            absorbance,
            slope,
            intercept,
            dilution_factor,
        }
    }

    pub fn from_fields(reader: &FieldReader) -> Result<Self, CalcError> {
        Ok(Self::new(
            reader.number("absorbance")?,
            reader.number("slope")?,
            reader.number_or("intercept", 0.0)?,
            reader.number_or("dilution_factor", 1.0)?,
        ))
    }

    pub fn concentration(&self) -> Result<f64, CalcError> {
        if self.slope == 0.0 {
            return Err(CalcError::validation("Standard curve slope cannot be zero"));
        }
        if self.dilution_factor <= 0.0 {
            return Err(CalcError::validation("Dilution factor must be positive"));
        }
        let concentration = ensure_finite(
            (self.absorbance - self.intercept) / self.slope * self.dilution_factor,
        )?;
        if concentration < 0.0 {
            return Err(CalcError::validation(
                "Calculated concentration is negative, please check your standard curve values",
            ));
        }
        Ok(concentration)
    }
}

impl FormulaSolver for BradfordAssay {
    fn name(&self) -> &'static str {
        "Bradford protein assay"
    }

    fn mode(&self) -> &'static str {
        "bradford"
    }

    fn solve(&self) -> Result<CalcOutput, CalcError> {
        let concentration = self.concentration()?;
        Ok(CalcOutput::new(self.name(), self.mode()).push(Quantity::fixed(
            "concentration",
            concentration,
            2,
            "μg/mL",
        )))
    }
}

pub struct AminoAcid {
    pub code: char,
    pub name: &'static str,
    /// average residue mass in Da
    pub residue_mass: f64,
}

/// water lost per peptide bond, Da
pub const WATER_MASS: f64 = 18.02;

pub const AMINO_ACIDS: &[AminoAcid] = &[
    AminoAcid {
        code: 'A',
        name: "alanine",
        residue_mass: 71.08,
    },
    AminoAcid {
        code: 'R',
        name: "arginine",
        residue_mass: 156.19,
    },
    AminoAcid {
        code: 'N',
        name: "asparagine",
        residue_mass: 114.11,
    },
    AminoAcid {
        code: 'D',
        name: "aspartic acid",
        residue_mass: 115.09,
    },
    AminoAcid {
        code: 'C',
        name: "cysteine",
        residue_mass: 103.15,
    },
    AminoAcid {
        code: 'E',
        name: "glutamic acid",
        residue_mass: 129.12,
    },
    AminoAcid {
        code: 'Q',
        name: "glutamine",
        residue_mass: 128.13,
    },
    AminoAcid {
        code: 'G',
        name: "glycine",
        residue_mass: 57.05,
    },
    AminoAcid {
        code: 'H',
        name: "histidine",
        residue_mass: 137.14,
    },
    AminoAcid {
        code: 'I',
        name: "isoleucine",
        residue_mass: 113.16,
    },
    AminoAcid {
        code: 'L',
        name: "leucine",
        residue_mass: 113.16,
    },
    AminoAcid {
        code: 'K',
        name: "lysine",
        residue_mass: 128.17,
    },
    AminoAcid {
        code: 'M',
        name: "methionine",
        residue_mass: 131.19,
    },
    AminoAcid {
        code: 'F',
        name: "phenylalanine",
        residue_mass: 147.18,
    },
    AminoAcid {
        code: 'P',
        name: "proline",
        residue_mass: 97.12,
    },
    AminoAcid {
        code: 'S',
        name: "serine",
        residue_mass: 87.08,
    },
    AminoAcid {
        code: 'T',
        name: "threonine",
        residue_mass: 101.11,
    },
    AminoAcid {
        code: 'W',
        name: "tryptophan",
        residue_mass: 186.21,
    },
    AminoAcid {
        code: 'Y',
        name: "tyrosine",
        residue_mass: 163.18,
    },
    AminoAcid {
        code: 'V',
        name: "valine",
        residue_mass: 99.13,
    },
];

pub fn residue_mass(code: char) -> Option<f64> {
    AMINO_ACIDS
        .iter()
        .find(|aa| aa.code == code)
        .map(|aa| aa.residue_mass)
}

/// molecular weight of a sequence together with the letters that were skipped
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceWeight {
    /// Da
    pub weight: f64,
    pub residues: usize,
    /// each unknown letter once, in order of first appearance
    pub unknown: Vec<char>,
}

/// Sums residue masses of the recognised letters and subtracts one water per
/// peptide bond between them. Case-insensitive; whitespace is ignored.
pub fn molecular_weight(sequence: &str) -> SequenceWeight {
    let mut weight = 0.0;
    let mut residues = 0;
    let mut unknown: Vec<char> = Vec::new();
    // ASCII folding only: full Unicode uppercasing turns 'ß' into "SS"
    for code in strip_whitespace(sequence).chars() {
        let code = code.to_ascii_uppercase();
        match residue_mass(code) {
            Some(mass) => {
                weight += mass;
                residues += 1;
            }
            None => {
                if !unknown.contains(&code) {
                    unknown.push(code);
                }
            }
        }
    }
    if residues > 1 {
        weight -= (residues - 1) as f64 * WATER_MASS;
    }
    SequenceWeight {
        weight,
        residues,
        unknown,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProteinMolecularWeight {
    pub sequence: String,
}

impl ProteinMolecularWeight {
    pub fn new(sequence: &str) -> Self {
        Self {
            sequence: sequence.to_string(),
        }
    }

    /// a blank sequence is valid and yields no result
    pub fn from_fields(reader: &FieldReader) -> Result<Self, CalcError> {
        Ok(Self::new(reader.text_or("sequence", "")))
    }
}

impl FormulaSolver for ProteinMolecularWeight {
    fn name(&self) -> &'static str {
        "Protein molecular weight"
    }

    fn mode(&self) -> &'static str {
        "molecular-weight"
    }

    fn solve(&self) -> Result<CalcOutput, CalcError> {
        let mut output = CalcOutput::new(self.name(), self.mode());
        if strip_whitespace(&self.sequence).is_empty() {
            return Ok(output);
        }
        let result = molecular_weight(&self.sequence);
        if !result.unknown.is_empty() {
            let letters = result
                .unknown
                .iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            warn!("unknown amino acid codes skipped: {}", letters);
            output = output.with_warning(format!(
                "Unknown amino acid(s): {}. Use one-letter codes like A, R, N, etc.",
                letters
            ));
        }
        if result.residues == 0 {
            return Ok(output);
        }
        let weight = ensure_finite(result.weight)?;
        let text = format!(
            "{} Da ({} kDa)",
            format_fixed(weight, 2),
            format_fixed(weight / 1000.0, 2)
        );
        Ok(output.push(Quantity::new("molecular_weight", weight, "Da", &text)))
    }
}
