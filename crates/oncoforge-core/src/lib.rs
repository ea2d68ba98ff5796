pub mod codon;
pub mod config;
pub mod consts;
pub mod error;
pub mod events;
pub mod export;
pub mod mutation;
pub mod prng;
pub mod scoring;
pub mod search;
pub mod seq;
pub mod trajectory;
