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

use crate::{BooleanFormula, Clause, CnfFormula, LabelType, Literal};
use rustc_hash::FxHashSet;

/// Queries on the labels involved in a value.
pub trait LabelQuery<L> {
    /// Returns the set of labels involved in this value.
    ///
    /// Constants involve no label.
    ///
    /// # Examples
    ///
    /// ```
    /// use lite_cnf::{Literal, LabelQuery};
    ///
    /// let f = (Literal::new("a") | Literal::new("b")) & !Literal::new("a");
    /// let mut labels = f.labels().into_iter().collect::<Vec<_>>();
    /// labels.sort_unstable();
    /// assert_eq!(vec!["a", "b"], labels);
    /// ```
    fn labels(&self) -> FxHashSet<L>;

    /// Returns `true` iff the label appears in this value, whatever its polarity.
    fn contains_label(&self, label: &L) -> bool;
}

impl<L> LabelQuery<L> for Literal<L>
where
    L: LabelType,
{
    fn labels(&self) -> FxHashSet<L> {
        let mut set = FxHashSet::default();
        set.insert(self.label().clone());
        set
    }

    fn contains_label(&self, label: &L) -> bool {
        self.label() == label
    }
}

impl<L> LabelQuery<L> for Clause<L>
where
    L: LabelType,
{
    fn labels(&self) -> FxHashSet<L> {
        self.as_literals()
            .iter()
            .map(|l| l.label().clone())
            .collect()
    }

    fn contains_label(&self, label: &L) -> bool {
        self.as_literals().iter().any(|l| l.label() == label)
    }
}

impl<L> LabelQuery<L> for CnfFormula<L>
where
    L: LabelType,
{
    fn labels(&self) -> FxHashSet<L> {
        self.as_clauses()
            .iter()
            .flat_map(|c| c.as_literals().iter().map(|l| l.label().clone()))
            .collect()
    }

    fn contains_label(&self, label: &L) -> bool {
        self.as_clauses().iter().any(|c| c.contains_label(label))
    }
}

impl<L> LabelQuery<L> for BooleanFormula<L>
where
    L: LabelType,
{
    fn labels(&self) -> FxHashSet<L> {
        match self {
            BooleanFormula::Literal(l) => l.labels(),
            BooleanFormula::Formula(f) => f.labels(),
            BooleanFormula::Tautology | BooleanFormula::Contradiction => FxHashSet::default(),
        }
    }

    fn contains_label(&self, label: &L) -> bool {
        match self {
            BooleanFormula::Literal(l) => l.contains_label(label),
            BooleanFormula::Formula(f) => f.contains_label(label),
            BooleanFormula::Tautology | BooleanFormula::Contradiction => false,
        }
    }
}
