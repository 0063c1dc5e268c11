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

use crate::{BooleanFormula, LabelType, Literal};

/// Builds the conjunction of the positive literals of the given labels.
///
/// An empty input gives a tautology.
///
/// # Examples
///
/// ```
/// use lite_cnf::{conjunction_of, Literal};
///
/// assert_eq!(Literal::new("a") & Literal::new("b"), conjunction_of(vec!["a", "b"]));
/// assert!(conjunction_of(Vec::<&str>::new()).is_tautology());
/// ```
pub fn conjunction_of<L, I>(labels: I) -> BooleanFormula<L>
where
    L: LabelType,
    I: IntoIterator<Item = L>,
{
    labels
        .into_iter()
        .fold(BooleanFormula::Tautology, |acc, l| acc.and(Literal::new(l)))
}

/// Builds the disjunction of the positive literals of the given labels.
///
/// An empty input gives a contradiction.
pub fn disjunction_of<L, I>(labels: I) -> BooleanFormula<L>
where
    L: LabelType,
    I: IntoIterator<Item = L>,
{
    labels
        .into_iter()
        .fold(BooleanFormula::Contradiction, |acc, l| acc.or(Literal::new(l)))
}
