use crate::error::{OfResult, OncoForgeError};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// One DNA base.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum Nucleotide {
    A,
    T,
    C,
    G,
}

impl Nucleotide {
    pub const ALL: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::T, Nucleotide::C, Nucleotide::G];

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Nucleotide::A),
            'T' => Some(Nucleotide::T),
            'C' => Some(Nucleotide::C),
            'G' => Some(Nucleotide::G),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::T => 'T',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
        }
    }

    /// Index into the 4-symbol alphabet (A=0, T=1, C=2, G=3). Used to encode
    /// codons into the flat genetic-code table.
    pub fn index(self) -> usize {
        match self {
            Nucleotide::A => 0,
            Nucleotide::T => 1,
            Nucleotide::C => 2,
            Nucleotide::G => 3,
        }
    }

    /// The three bases a substitution can land on, in alphabet order.
    pub fn alternatives(self) -> [Nucleotide; 3] {
        let mut out = [Nucleotide::A; 3];
        let mut i = 0;
        for base in Nucleotide::ALL {
            if base != self {
                out[i] = base;
                i += 1;
            }
        }
        out
    }
}

/// One of the 20 standard amino acids. Displays and parses as the one-letter
/// code.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum AminoAcid {
    #[strum(serialize = "A")]
    Ala,
    #[strum(serialize = "R")]
    Arg,
    #[strum(serialize = "N")]
    Asn,
    #[strum(serialize = "D")]
    Asp,
    #[strum(serialize = "C")]
    Cys,
    #[strum(serialize = "Q")]
    Gln,
    #[strum(serialize = "E")]
    Glu,
    #[strum(serialize = "G")]
    Gly,
    #[strum(serialize = "H")]
    His,
    #[strum(serialize = "I")]
    Ile,
    #[strum(serialize = "L")]
    Leu,
    #[strum(serialize = "K")]
    Lys,
    #[strum(serialize = "M")]
    Met,
    #[strum(serialize = "F")]
    Phe,
    #[strum(serialize = "P")]
    Pro,
    #[strum(serialize = "S")]
    Ser,
    #[strum(serialize = "T")]
    Thr,
    #[strum(serialize = "W")]
    Trp,
    #[strum(serialize = "Y")]
    Tyr,
    #[strum(serialize = "V")]
    Val,
}

impl AminoAcid {
    pub fn code(self) -> char {
        match self {
            AminoAcid::Ala => 'A',
            AminoAcid::Arg => 'R',
            AminoAcid::Asn => 'N',
            AminoAcid::Asp => 'D',
            AminoAcid::Cys => 'C',
            AminoAcid::Gln => 'Q',
            AminoAcid::Glu => 'E',
            AminoAcid::Gly => 'G',
            AminoAcid::His => 'H',
            AminoAcid::Ile => 'I',
            AminoAcid::Leu => 'L',
            AminoAcid::Lys => 'K',
            AminoAcid::Met => 'M',
            AminoAcid::Phe => 'F',
            AminoAcid::Pro => 'P',
            AminoAcid::Ser => 'S',
            AminoAcid::Thr => 'T',
            AminoAcid::Trp => 'W',
            AminoAcid::Tyr => 'Y',
            AminoAcid::Val => 'V',
        }
    }
}

/// Parses raw text into a typed nucleotide sequence. Case-insensitive;
/// anything outside ATCG fails with `InvalidSequence` instead of being
/// silently mistranslated downstream.
pub fn parse_dna(raw: &str) -> OfResult<Vec<Nucleotide>> {
    raw.trim()
        .chars()
        .enumerate()
        .map(|(position, found)| {
            Nucleotide::from_char(found)
                .ok_or(OncoForgeError::InvalidSequence { position, found })
        })
        .collect()
}

pub fn dna_to_string(dna: &[Nucleotide]) -> String {
    dna.iter().map(|n| n.to_char()).collect()
}

pub fn protein_to_string(protein: &[AminoAcid]) -> String {
    protein.iter().map(|a| a.code()).collect()
}
