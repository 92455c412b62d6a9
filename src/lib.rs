//! vtm-dice: dice pool evaluation for Vampire: The Masquerade 5th edition
//!
//! Goals:
//! - Pure, deterministic classification of a rolled pool (given its faces)
//! - Small, well-documented public API
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: evaluate a roll
//! ```
//! use vtm_dice::dice::faces_from_values;
//! use vtm_dice::evaluator::{evaluate, RollOutcome};
//! use vtm_dice::request::RollRequest;
//!
//! // Random faces
//! let out = evaluate(6, 3, 2, None).unwrap();
//! assert_eq!(out.faces().len(), 6);
//!
//! // Fixed faces: two ones on hunger dice sink the roll
//! let req = RollRequest::new(3, 1, 2, None).unwrap();
//! let out = RollOutcome::from_faces(req, faces_from_values(&[1, 1, 6]).unwrap()).unwrap();
//! assert_eq!(out.successes(), 0);
//! assert!(out.bestial_failure());
//! ```
//!
//! ## TUI
//! Run the interactive configurator with:
//! ```sh
//! cargo run --bin vtm-dice
//! ```

pub mod dice;
pub mod evaluator;
pub mod render;
pub mod request;
pub mod session;
pub mod surface;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
