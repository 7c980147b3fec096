pub mod dna;
pub mod params;
