// lite_cnf
// Copyright (C) 2021  Univ. Artois & CNRS
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! A library dedicated to propositional formulas kept in Conjunctive Normal Form.
//!
//! Formulas are built from [`Literal`]s using the `&`, `|`, `^` and `!` operators.
//! Each operation returns a normalized [`BooleanFormula`] in which unit clauses are propagated.
//! Formulas detected as trivial during the normalization collapse to [`BooleanFormula::Tautology`] or [`BooleanFormula::Contradiction`].
//! No satisfiability check is performed, so an unsatisfiable formula may remain a [`BooleanFormula::Formula`].
//!
//! ```
//! use lite_cnf::{BooleanFormula, LabelQuery, Literal, Substitution};
//!
//! let a = Literal::new("a");
//! let b = Literal::new("b");
//! let c = Literal::new("c");
//! let f = (a.clone() | b.clone()) & (!a.clone() | c.clone());
//! assert_eq!(2, f.as_formula().unwrap().n_clauses());
//! assert_eq!(3, f.labels().len());
//! assert_eq!(BooleanFormula::from(c), f.substitute(&"a", &true.into()));
//! assert_eq!(BooleanFormula::from(b), f.substitute(&"a", &false.into()));
//! assert_eq!(BooleanFormula::Contradiction, a.clone() & !a);
//! ```

mod core;

pub mod dynamic;
pub use dynamic::InvalidOperand;

mod io;
pub use io::DefaultDisplay;
pub use io::FormulaReader;
pub use io::FormulaWriter;

mod languages;
pub use languages::BooleanFormula;
pub use languages::Clause;
pub use languages::CnfFormula;


mod queries;
pub use queries::LabelQuery;
pub use queries::Subsumable;

mod shortcuts;
pub use shortcuts::conjunction_of;
pub use shortcuts::disjunction_of;

mod transformations;
pub use transformations::Negation;
pub use transformations::Substitution;

mod utils;
pub use utils::MaybeTrivial;

pub use crate::core::LabelType;
pub use crate::core::Literal;
