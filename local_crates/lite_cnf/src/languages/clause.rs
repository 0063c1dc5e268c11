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

use crate::{
    core::LiteralVec, CnfFormula, LabelType, Literal, MaybeTrivial, Negation, Subsumable,
};
use rustc_hash::FxHashSet;

/// A disjunction of [`Literal`]s.
///
/// A clause never contains a literal and its negation, nor duplicated literals.
/// The only way to obtain a clause is the [`build`](Clause::build) smart constructor,
/// which returns the right constant when the set of literals is trivial.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clause<L> {
    literals: Vec<Literal<L>>,
}

impl<L> Clause<L>
where
    L: LabelType,
{
    /// Builds a clause from a collection of literals.
    ///
    /// Duplicated literals are merged.
    /// If the collection contains a literal and its negation, [`MaybeTrivial::True`] is returned;
    /// if it is empty, [`MaybeTrivial::False`] is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use lite_cnf::{Clause, Literal, MaybeTrivial};
    ///
    /// let x = Literal::new("x");
    /// let clause = Clause::build(vec![x.clone(), Literal::new("y"), x.clone()]).unwrap();
    /// assert_eq!(2, clause.n_literals());
    /// assert_eq!(MaybeTrivial::True, Clause::build(vec![x.clone(), x.negate()]));
    /// assert_eq!(MaybeTrivial::False, Clause::<&str>::build(vec![]));
    /// ```
    pub fn build<I>(literals: I) -> MaybeTrivial<Self>
    where
        I: IntoIterator<Item = Literal<L>>,
    {
        match literals.into_iter().collect::<LiteralVec<L>>().clean() {
            None => MaybeTrivial::True,
            Some(v) => {
                let literals = v.into_vec();
                if literals.is_empty() {
                    MaybeTrivial::False
                } else {
                    MaybeTrivial::NotTrivial(Clause { literals })
                }
            }
        }
    }

    pub(crate) fn unit(literal: Literal<L>) -> Self {
        Clause {
            literals: vec![literal],
        }
    }

    /// Returns the literals of this clause, sorted.
    pub fn as_literals(&self) -> &[Literal<L>] {
        &self.literals
    }

    /// Consumes this clause, returning its literals.
    pub fn into_literals(self) -> Vec<Literal<L>> {
        self.literals
    }

    /// Returns the number of literals of this clause.
    pub fn n_literals(&self) -> usize {
        self.literals.len()
    }

    /// Returns the literal of this clause if it is a unit clause.
    pub fn unit_literal(&self) -> Option<&Literal<L>> {
        match self.literals.as_slice() {
            [l] => Some(l),
            _ => None,
        }
    }

    /// Returns `true` iff `literal` is one of the disjuncts of this clause.
    pub fn contains_literal(&self, literal: &Literal<L>) -> bool {
        self.literals.binary_search(literal).is_ok()
    }

    /// Computes the disjunction of two clauses.
    ///
    /// # Examples
    ///
    /// ```
    /// use lite_cnf::{Clause, Literal};
    ///
    /// let x = Literal::new("x");
    /// let c1 = Clause::build(vec![x.clone()]).unwrap();
    /// let c2 = Clause::build(vec![Literal::new("y")]).unwrap();
    /// assert_eq!(2, c1.disjoin(&c2).unwrap().n_literals());
    /// let c3 = Clause::build(vec![x.negate()]).unwrap();
    /// assert!(c1.disjoin(&c3).is_true());
    /// ```
    pub fn disjoin(&self, other: &Clause<L>) -> MaybeTrivial<Self> {
        Clause::build(self.literals.iter().chain(other.literals.iter()).cloned())
    }

    /// Rebuilds this clause without the literals in `removed`.
    ///
    /// Returns [`MaybeTrivial::False`] if no literal remains.
    pub(crate) fn without_literals(&self, removed: &FxHashSet<Literal<L>>) -> MaybeTrivial<Self> {
        Clause::build(
            self.literals
                .iter()
                .filter(|l| !removed.contains(l))
                .cloned(),
        )
    }
}

fn is_lit_vec_included<L>(first: &[Literal<L>], other: &[Literal<L>]) -> bool
where
    L: LabelType,
{
    if first.len() > other.len() {
        return false;
    }
    let mut j = 0;
    for l in first.iter() {
        while j < other.len() && other[j] < *l {
            j += 1;
        }
        if j == other.len() || other[j] != *l {
            return false;
        }
    }
    true
}

impl<L> Subsumable<Clause<L>> for Clause<L>
where
    L: LabelType,
{
    fn subsumes(&self, other: &Clause<L>) -> bool {
        is_lit_vec_included(self.as_literals(), other.as_literals())
    }
}

impl<L> Negation<MaybeTrivial<CnfFormula<L>>> for Clause<L>
where
    L: LabelType,
{
    /// Applies De Morgan's law: the result is the conjunction of the negated literals.
    fn negate(self) -> MaybeTrivial<CnfFormula<L>> {
        CnfFormula::build(
            self.literals
                .into_iter()
                .map(|l| Clause::unit(l.negate())),
        )
    }
}

impl<L> From<Clause<L>> for MaybeTrivial<Clause<L>> {
    fn from(c: Clause<L>) -> Self {
        MaybeTrivial::NotTrivial(c)
    }
}

impl<L> From<Vec<Literal<L>>> for MaybeTrivial<Clause<L>>
where
    L: LabelType,
{
    fn from(literals: Vec<Literal<L>>) -> Self {
        Clause::build(literals)
    }
}
