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

/// A value that can be negated into a value of type `T`.
///
/// The source and target types may be different:
/// the negation of a [`Clause`](crate::Clause) is a conjunction of unit clauses,
/// and the negation of a [`CnfFormula`](crate::CnfFormula) may be a single literal or a constant.
pub trait Negation<T> {
    /// Negates the current value, consuming it to produce a new one of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lite_cnf::{BooleanFormula, Literal, Negation};
    ///
    /// let f = Literal::new("x") & Literal::new("y");
    /// assert_eq!(!Literal::new("x") | !Literal::new("y"), f.negate());
    /// assert_eq!(BooleanFormula::<&str>::Contradiction, BooleanFormula::<&str>::Tautology.negate());
    /// ```
    fn negate(self) -> T;
}
