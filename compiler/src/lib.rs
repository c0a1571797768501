//! promgen-compiler
//!
//! This crate implements:
//!  1) A line classifier for hand-written metric struct descriptions,
//!  2) A single-pass parser producing `MetricBlock`s plus the type → tag and
//!     type → accessor lookup tables,
//!  3) A verifier that reports references which will render as placeholders,
//!  4) Go code generation (`generate_metrics` for Prometheus gauges and
//!     `translate_types` for the mirrored Go structs),
//!  5) Error types (`MetricsError`).

pub mod error;
pub mod types;
pub mod utils;
pub mod tokenizer;
pub mod parser;
pub mod verifier;
pub mod compiler;
pub mod gen_metrics;
pub mod gen_types;

pub use compiler::{compile_all, compile_metrics, compile_types};
pub use gen_metrics::{generate_metrics, GeneratorConfig};
pub use gen_types::translate_types;
