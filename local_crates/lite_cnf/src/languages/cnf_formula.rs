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

use crate::{BooleanFormula, Clause, LabelType, Literal, MaybeTrivial, Negation, Subsumable};
use log::trace;
use rustc_hash::FxHashSet;

/// A conjunction of [`Clause`]s.
///
/// Formulas are only obtained through the [`build`](CnfFormula::build) smart constructor,
/// which propagates unit clauses:
/// * a clause containing the literal of a unit clause is removed;
/// * the negation of the literal of a unit clause is removed from the other clauses;
/// * these rules are applied again as long as they produce new unit clauses.
///
/// Clauses are kept sorted and without duplicates,
/// so that formulas made of the same clauses are equal and have the same hash.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CnfFormula<L> {
    clauses: Vec<Clause<L>>,
}

impl<L> CnfFormula<L>
where
    L: LabelType,
{
    /// Builds a new formula given its clauses.
    ///
    /// Each input may already be a constant.
    /// If one of them is [`MaybeTrivial::False`], or if unit propagation produces an empty clause
    /// or two opposite unit clauses, [`MaybeTrivial::False`] is returned.
    /// If no clause remains, [`MaybeTrivial::True`] is returned.
    /// Clauses subsumed by another clause are removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use lite_cnf::{Clause, CnfFormula, Literal, MaybeTrivial};
    ///
    /// let a = Literal::new("a");
    /// let b = Literal::new("b");
    /// let f = CnfFormula::build(vec![
    ///     Clause::build(vec![a.clone()]),
    ///     Clause::build(vec![a.negate(), b.clone()]),
    /// ])
    /// .unwrap();
    /// assert_eq!(2, f.n_clauses());
    /// assert!(f.as_clauses().iter().all(|c| c.n_literals() == 1));
    ///
    /// let contradiction = CnfFormula::build(vec![
    ///     Clause::build(vec![a.clone()]),
    ///     Clause::build(vec![a.negate()]),
    /// ]);
    /// assert_eq!(MaybeTrivial::False, contradiction);
    /// ```
    pub fn build<I, T>(clauses: I) -> MaybeTrivial<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<MaybeTrivial<Clause<L>>>,
    {
        let mut working = Vec::new();
        for clause in clauses {
            match clause.into() {
                MaybeTrivial::NotTrivial(c) => working.push(c),
                MaybeTrivial::True => {}
                MaybeTrivial::False => return MaybeTrivial::False,
            }
        }
        loop {
            let unit_literals = match collect_unit_literals(&working) {
                Some(u) => u,
                None => {
                    trace!("opposite unit clauses found while building a formula");
                    return MaybeTrivial::False;
                }
            };
            let negated_units = unit_literals
                .iter()
                .map(Literal::negate)
                .collect::<FxHashSet<Literal<L>>>();
            let mut next = Vec::with_capacity(working.len());
            let mut new_units = false;
            for clause in working {
                if clause.unit_literal().is_some() {
                    next.push(clause);
                    continue;
                }
                if clause
                    .as_literals()
                    .iter()
                    .any(|l| unit_literals.contains(l))
                {
                    continue;
                }
                if !clause
                    .as_literals()
                    .iter()
                    .any(|l| negated_units.contains(l))
                {
                    next.push(clause);
                    continue;
                }
                match clause.without_literals(&negated_units) {
                    MaybeTrivial::NotTrivial(c) => {
                        new_units |= c.unit_literal().is_some();
                        next.push(c);
                    }
                    MaybeTrivial::True => {}
                    MaybeTrivial::False => {
                        trace!("unit propagation emptied a clause while building a formula");
                        return MaybeTrivial::False;
                    }
                }
            }
            working = next;
            if !new_units {
                break;
            }
        }
        let mut working = remove_subsumed(working);
        working.sort_unstable();
        if working.is_empty() {
            MaybeTrivial::True
        } else {
            MaybeTrivial::NotTrivial(CnfFormula { clauses: working })
        }
    }

    /// Returns the clauses of this formula, sorted.
    pub fn as_clauses(&self) -> &[Clause<L>] {
        &self.clauses
    }

    /// Consumes this formula, returning its clauses.
    pub fn into_clauses(self) -> Vec<Clause<L>> {
        self.clauses
    }

    /// Returns the number of clauses this formula contains.
    pub fn n_clauses(&self) -> usize {
        self.clauses.len()
    }

    /// Returns the literal of this formula if it is made of a single unit clause.
    pub fn single_literal(&self) -> Option<&Literal<L>> {
        match self.clauses.as_slice() {
            [c] => c.unit_literal(),
            _ => None,
        }
    }
}

/// Returns the literals of the unit clauses, or `None` if two of them are opposite.
fn collect_unit_literals<L>(clauses: &[Clause<L>]) -> Option<FxHashSet<Literal<L>>>
where
    L: LabelType,
{
    let mut singles = FxHashSet::default();
    for clause in clauses {
        if let Some(l) = clause.unit_literal() {
            if singles.contains(&l.negate()) {
                return None;
            }
            singles.insert(l.clone());
        }
    }
    Some(singles)
}

/// Keeps the clauses that are not subsumed by another one.
fn remove_subsumed<L>(mut clauses: Vec<Clause<L>>) -> Vec<Clause<L>>
where
    L: LabelType,
{
    clauses.sort_by_key(Clause::n_literals);
    let mut kept: Vec<Clause<L>> = Vec::with_capacity(clauses.len());
    for c in clauses {
        if !kept.iter().any(|k| k.subsumes(&c)) {
            kept.push(c);
        }
    }
    kept
}

impl<L> Negation<BooleanFormula<L>> for CnfFormula<L>
where
    L: LabelType,
{
    /// Applies De Morgan's law: the result is the disjunction of the negated clauses.
    fn negate(self) -> BooleanFormula<L> {
        self.clauses
            .into_iter()
            .map(|c| BooleanFormula::from(c.negate()))
            .fold(BooleanFormula::Contradiction, |acc, f| acc.or(f))
    }
}

impl<L, T> From<Vec<T>> for MaybeTrivial<CnfFormula<L>>
where
    L: LabelType,
    T: Into<MaybeTrivial<Clause<L>>>,
{
    fn from(clauses: Vec<T>) -> Self {
        CnfFormula::build(clauses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(label: &'static str) -> Literal<&'static str> {
        if let Some(l) = label.strip_prefix('-') {
            Literal::new(l).negate()
        } else {
            Literal::new(label)
        }
    }

    fn cnf(clauses: &[&[&'static str]]) -> MaybeTrivial<CnfFormula<&'static str>> {
        MaybeTrivial::<CnfFormula<_>>::from(
            clauses
                .iter()
                .map(|c| c.iter().map(|l| lit(l)).collect::<Vec<_>>())
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn test_build_keeps_independent_clauses() {
        let f = cnf(&[&["a", "b"], &["-a", "c"]]).unwrap();
        assert_eq!(2, f.n_clauses());
    }

    #[test]
    fn test_build_is_order_independent() {
        assert_eq!(
            cnf(&[&["a", "b"], &["-a", "c"], &["d"]]),
            cnf(&[&["d"], &["c", "-a"], &["b", "a"]])
        );
    }

    #[test]
    fn test_build_merges_duplicates() {
        let f = cnf(&[&["a", "b"], &["b", "a"], &["c", "d"]]).unwrap();
        assert_eq!(2, f.n_clauses());
    }

    #[test]
    fn test_build_tautology_when_empty() {
        assert!(cnf(&[]).is_true());
    }

    #[test]
    fn test_build_drops_tautological_clauses() {
        assert!(cnf(&[&["a", "-a"], &["b", "-b", "c"]]).is_true());
        assert_eq!(cnf(&[&["c", "d"]]), cnf(&[&["a", "-a"], &["c", "d"]]));
    }

    #[test]
    fn test_build_contradiction_on_false_input() {
        let f = CnfFormula::build(vec![
            MaybeTrivial::NotTrivial(Clause::unit(lit("a"))),
            MaybeTrivial::False,
        ]);
        assert!(f.is_false());
    }

    #[test]
    fn test_build_contradiction_on_empty_clause() {
        assert!(cnf(&[&["a", "b"], &[]]).is_false());
    }

    #[test]
    fn test_build_opposite_units() {
        assert!(cnf(&[&["a"], &["b", "c"], &["-a"]]).is_false());
    }

    #[test]
    fn test_build_unit_propagation() {
        assert_eq!(cnf(&[&["a"], &["b", "c"]]), cnf(&[&["a"], &["-a", "b", "c"]]));
    }

    #[test]
    fn test_build_unit_subsumption() {
        assert_eq!(cnf(&[&["a"]]), cnf(&[&["a"], &["a", "b"], &["a", "-c"]]));
    }

    #[test]
    fn test_build_propagation_empties_clause() {
        assert!(cnf(&[&["a"], &["b"], &["-a", "-b"]]).is_false());
    }

    #[test]
    fn test_build_propagates_derived_units() {
        let f = cnf(&[&["a"], &["-a", "b"], &["-b", "c"], &["-c", "d", "e"]]).unwrap();
        assert_eq!(cnf(&[&["a"], &["b"], &["c"], &["d", "e"]]).unwrap(), f);
    }

    #[test]
    fn test_build_derived_units_contradiction() {
        assert!(cnf(&[&["a"], &["-a", "b"], &["-b"]]).is_false());
    }

    #[test]
    fn test_single_literal() {
        assert_eq!(Some(&lit("-a")), cnf(&[&["-a"]]).unwrap().single_literal());
        assert_eq!(None, cnf(&[&["a", "b"]]).unwrap().single_literal());
        assert_eq!(None, cnf(&[&["a"], &["b"]]).unwrap().single_literal());
    }

    #[test]
    fn test_negate_single_clause() {
        let f = cnf(&[&["a", "-b"]]).unwrap();
        assert_eq!(
            BooleanFormula::from(cnf(&[&["-a"], &["b"]])),
            f.negate()
        );
    }

    #[test]
    fn test_negate_units() {
        let f = cnf(&[&["a"], &["-b"]]).unwrap();
        assert_eq!(BooleanFormula::from(cnf(&[&["-a", "b"]])), f.negate());
    }

    #[test]
    fn test_negate_distributes() {
        let f = cnf(&[&["a", "b"], &["c", "d"]]).unwrap();
        assert_eq!(
            BooleanFormula::from(cnf(&[&["-a", "-c"], &["-a", "-d"], &["-b", "-c"], &["-b", "-d"]])),
            f.negate()
        );
    }

    #[test]
    fn test_build_removes_subsumed_clauses() {
        assert_eq!(
            cnf(&[&["a", "b"], &["c", "d"]]),
            cnf(&[&["a", "b"], &["a", "b", "c"], &["a", "c", "d"], &["c", "d"]])
        );
    }

    #[test]
    fn test_build_removes_clauses_subsumed_after_propagation() {
        assert_eq!(
            cnf(&[&["a"], &["b", "c"]]),
            cnf(&[&["a"], &["-a", "b", "c"], &["b", "c", "d"]])
        );
    }

    #[test]
    fn test_build_keeps_unsubsumed_clauses() {
        let f = cnf(&[&["a", "b"], &["-a", "c"], &["b", "c"]]).unwrap();
        assert_eq!(3, f.n_clauses());
    }

    #[test]
    fn test_double_negation_of_two_clauses() {
        let f = BooleanFormula::from(cnf(&[&["a", "b"], &["c", "d"]]));
        assert_eq!(f.clone(), f.negate().negate());
    }
}
