//! # stoichsieve Core Library
//!
//! A combinatorial stoichiometry screening library for systematic
//! materials-discovery candidate generation over binary, ternary, and
//! quaternary chemical systems.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear separation of concerns,
//! making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`Composition`, `Species`,
//!   result tables), embedded chemistry reference data, and the oracle trait contracts with
//!   their default heuristic implementations.
//!
//! - **[`engine`]: The Logic Core.** Candidate generation (fixed-ratio scaling, bounded
//!   integer grids), chemical-subsystem enumeration, screening configuration, and the
//!   parallel screening tasks that evaluate every candidate against an oracle.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing layer. It ties the
//!   `engine` and `core` together into complete screening procedures (binary, ternary,
//!   quaternary, oxidation-state analysis) with eager input validation and progress reporting.

pub mod core;
pub mod engine;
pub mod workflows;
