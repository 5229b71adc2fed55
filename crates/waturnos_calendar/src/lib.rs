// --- File: crates/waturnos_calendar/src/lib.rs ---
// Declare modules within this crate
pub mod controller;
pub mod fetcher;
pub mod gate;
#[cfg(test)]
mod gate_test;
pub mod models;
pub mod occupancy;
pub mod projector;
#[cfg(test)]
mod projector_proptest;
pub mod range;
