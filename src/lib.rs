// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Step-driven sorting visualization engine.
//!
//! Six classic sorting algorithms run as resumable state machines: each
//! call to [`sort::StepSort::advance`] performs one swap, shift, write or
//! comparison and reports which bars to highlight. A driver can pace those
//! calls at any rate, pause between them, or abandon a sort half-way.
//!
//! # Key entry points
//!
//! - [`engine::Visualizer`] - the driver owning the array and active engine
//! - [`sort::SortEngine`] - one live engine of any [`sort::Algorithm`]
//! - [`sort::Verification`] - the post-sort sortedness sweep
//! - [`options::Options`] - runtime configuration (array, pacing, layout,
//!   colors, keybindings)
//! - [`layout::BarLayout`] - bar geometry for a renderer
//!
//! # Architecture
//!
//! Everything is single-threaded. The [`engine::Visualizer`] borrows its
//! array to the active engine for one step at a time, so the array can be
//! drawn between any two steps. When the engine reports completion the
//! driver replays the verification sweep frame by frame and returns to
//! idle.

pub mod engine;
pub mod error;
pub mod input;
pub mod layout;
pub mod model;
pub mod options;
pub mod sort;
pub mod util;

pub use engine::{Command, DriverState, Frame, Signal, Visualizer};
pub use error::SortvizError;
pub use model::{ArrayModel, Value};
pub use options::Options;
pub use sort::{Algorithm, Direction, SortEngine, Step, StepSort};
