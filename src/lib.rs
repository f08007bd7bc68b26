// Reusable library API shared by the `gridword`, `first_unique` and tooling binaries
pub mod config;
pub mod coord;
pub mod dictionary;
pub mod errors;
pub mod first_unique;
pub mod grid;
pub mod log;
pub mod report;
pub mod solver;
