use crate::seq::{AminoAcid, Nucleotide};
use itertools::Itertools;

/// Result of a single codon lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codon {
    Aa(AminoAcid),
    Stop,
}

use AminoAcid::*;
use Codon::{Aa, Stop};

/// The standard genetic code as a flat 64-entry table indexed by
/// [`codon_index`]. Row blocks follow the alphabet order A, T, C, G on each
/// base position.
pub static CODON_TABLE: [Codon; 64] = [
    Aa(Lys), Aa(Asn), Aa(Asn), Aa(Lys), // AA*
    Aa(Ile), Aa(Ile), Aa(Ile), Aa(Met), // AT*
    Aa(Thr), Aa(Thr), Aa(Thr), Aa(Thr), // AC*
    Aa(Arg), Aa(Ser), Aa(Ser), Aa(Arg), // AG*
    Stop, Aa(Tyr), Aa(Tyr), Stop, // TA*
    Aa(Leu), Aa(Phe), Aa(Phe), Aa(Leu), // TT*
    Aa(Ser), Aa(Ser), Aa(Ser), Aa(Ser), // TC*
    Stop, Aa(Cys), Aa(Cys), Aa(Trp), // TG*
    Aa(Gln), Aa(His), Aa(His), Aa(Gln), // CA*
    Aa(Leu), Aa(Leu), Aa(Leu), Aa(Leu), // CT*
    Aa(Pro), Aa(Pro), Aa(Pro), Aa(Pro), // CC*
    Aa(Arg), Aa(Arg), Aa(Arg), Aa(Arg), // CG*
    Aa(Glu), Aa(Asp), Aa(Asp), Aa(Glu), // GA*
    Aa(Val), Aa(Val), Aa(Val), Aa(Val), // GT*
    Aa(Ala), Aa(Ala), Aa(Ala), Aa(Ala), // GC*
    Aa(Gly), Aa(Gly), Aa(Gly), Aa(Gly), // GG*
];

/// Base-4 encoding of a codon into `CODON_TABLE`.
#[inline(always)]
pub fn codon_index(n1: Nucleotide, n2: Nucleotide, n3: Nucleotide) -> usize {
    n1.index() * 16 + n2.index() * 4 + n3.index()
}

/// Translates a nucleotide sequence into a protein.
///
/// Reads non-overlapping triplets left to right; translation terminates at
/// the first stop codon (the stop itself is excluded) and trailing bases
/// that do not fill a codon are ignored, not padded. Always produces a fresh
/// sequence; the input is never touched.
pub fn translate(dna: &[Nucleotide]) -> Vec<AminoAcid> {
    let mut protein = Vec::with_capacity(dna.len() / 3);
    for (n1, n2, n3) in dna.iter().copied().tuples() {
        match CODON_TABLE[codon_index(n1, n2, n3)] {
            Codon::Aa(aa) => protein.push(aa),
            Codon::Stop => break,
        }
    }
    protein
}
