//! Minimize single-output Boolean functions given as truth tables.
//!
//! A function is specified as a list of [rows](Row) mapping named inputs to
//! values, with an [output](Output) that is required (`1`), forbidden (`0`)
//! or unconstrained (`x`). Building a [TruthTable] freezes the
//! [variable ordering](VarOrder) (names sorted lexicographically) and
//! classifies the rows into [terms](Term): positional strings over the
//! symbols `0`, `1` and `-` where the position selects the variable and `-`
//! marks a wildcard.
//!
//! [Minimizing](TruthTable::minimize) the table runs the classic two-level
//! pipeline: iterative pairwise merging grows the minterms and don't-care
//! terms into the [prime implicants](Primes), the [covering table](CoverTable)
//! maps every required minterm to its coverers, and the implicants forced by
//! a solely-covered minterm become the final term set. The result can then
//! be rendered as a [sum-of-products expression](Sop), synthesized into an
//! AND-OR [gate netlist](Netlist), and checked by exhaustive
//! [simulation](VerificationTable) of every input assignment.
//!
//! ```
//! use minkit::{Output, Row, TruthTable};
//! # use minkit::MinkitError;
//! # fn main() -> Result<(), MinkitError> {
//!
//! // Y is true whenever at least one input is
//! let rows = vec![
//!     Row::new([("A", false), ("B", false)], Output::False),
//!     Row::new([("A", false), ("B", true)], Output::True),
//!     Row::new([("A", true), ("B", false)], Output::True),
//!     Row::new([("A", true), ("B", true)], Output::True),
//! ];
//!
//! let min = TruthTable::from_rows(rows)?.minimize()?;
//!
//! assert_eq!(min.expression().to_string(), "B + A");
//! assert_eq!(
//!     min.netlist().to_string(),
//!     "w0 = B\nw1 = A\nY = OR(w0, w1)\n"
//! );
//! assert_eq!(
//!     min.verify().to_string(),
//!     "A=0 B=0 => Y=0\nA=0 B=1 => Y=1\nA=1 B=0 => Y=1\nA=1 B=1 => Y=1\n"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Working with terms directly
//!
//! The intermediate stages are ordinary values and can be driven without a
//! truth table, using parsed [term sets](TermSet):
//!
//! ```
//! use minkit::{Primes, TermSet};
//! # use minkit::MinkitError;
//! # fn main() -> Result<(), MinkitError> {
//!
//! let terms: TermSet = "1100 ; 1110".parse()?;
//! let primes = Primes::from_terms(&terms);
//!
//! assert_eq!(primes.len(), 1);
//! assert!(primes.contains(&"11-0".parse()?));
//! # Ok(())
//! # }
//! ```
//!
//! # Determinism
//!
//! Collections preserve their insertion order everywhere, so the rendered
//! expression, netlist and verification table are reproducible across runs
//! on identical input. Failures are reproducible the same way: every error
//! names the row, name or term that triggered it, and re-running changes
//! nothing.

mod cover;
mod error;
mod minimize;
mod netlist;
mod primes;
mod sop;
mod space;
mod states;
mod table;
mod term;
mod terms;
mod variable;
mod verify;

use std::collections::HashMap;
use std::fmt;

// Export public structures and API
pub use cover::CoverTable;
pub use error::MinkitError;
pub use minimize::Minimization;
pub use netlist::{Assign, Gate, Netlist};
pub use primes::Primes;
pub use sop::Sop;
pub use space::VarOrder;
pub use states::State;
pub use table::{Output, Row, TruthTable};
pub use term::{Evaluate, Term};
pub use terms::TermSet;
pub use variable::{VarSet, Variable};
pub use verify::VerificationTable;
