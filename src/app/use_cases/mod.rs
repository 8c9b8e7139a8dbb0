//! Use-Cases der Application-Layer-Orchestrierung.

pub mod drawing;
pub mod export;
