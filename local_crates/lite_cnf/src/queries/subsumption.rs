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

/// A trait for values that can subsume others.
///
/// A clause `c1` subsumes a clause `c2` if each literal of `c1` appears in `c2`;
/// in this case `c2` is a logical consequence of `c1` and can be dropped from a conjunction containing both.
pub trait Subsumable<T> {
    /// Returns `true` iff this value subsumes the other one.
    fn subsumes(&self, other: &T) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Clause, Literal};

    fn clause(literals: &[&'static str]) -> Clause<&'static str> {
        Clause::build(literals.iter().map(|&s| match s.strip_prefix('-') {
            Some(l) => Literal::with_negation(l, true),
            None => Literal::new(s),
        }))
        .unwrap()
    }

    #[test]
    fn test_unit_subsumes_superset() {
        assert!(clause(&["a"]).subsumes(&clause(&["a", "b"])));
    }

    #[test]
    fn test_superset_does_not_subsume() {
        assert!(!clause(&["a", "b"]).subsumes(&clause(&["a"])));
    }

    #[test]
    fn test_subsumes_itself() {
        let c = clause(&["a", "-b", "c"]);
        assert!(c.subsumes(&c));
    }

    #[test]
    fn test_polarity_matters() {
        assert!(!clause(&["-a"]).subsumes(&clause(&["a", "b"])));
    }

    #[test]
    fn test_interleaved_literals() {
        assert!(clause(&["b", "d"]).subsumes(&clause(&["a", "b", "c", "d", "e"])));
        assert!(!clause(&["b", "f"]).subsumes(&clause(&["a", "b", "c", "d", "e"])));
    }
}
