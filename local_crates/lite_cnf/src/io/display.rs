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

//! Human-readable and parseable renderings of formulas.

use crate::{BooleanFormula, Clause, CnfFormula, LabelType, Literal};
use std::fmt::{self, Display, Formatter};

impl<L> Display for Literal<L>
where
    L: LabelType,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_negated() {
            write!(f, "~")?;
        }
        write!(f, "L({:?})", self.label())
    }
}

impl<L> Display for Clause<L>
where
    L: LabelType,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, l) in self.as_literals().iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{}", l)?;
        }
        Ok(())
    }
}

impl<L> Display for CnfFormula<L>
where
    L: LabelType,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, c) in self.as_clauses().iter().enumerate() {
            if i > 0 {
                write!(f, " & ")?;
            }
            write!(f, "({})", c)?;
        }
        Ok(())
    }
}

impl<L> Display for BooleanFormula<L>
where
    L: LabelType,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BooleanFormula::Tautology => write!(f, "Tautology"),
            BooleanFormula::Contradiction => write!(f, "Contradiction"),
            BooleanFormula::Literal(l) => write!(f, "{}", l),
            BooleanFormula::Formula(formula) => write!(f, "{}", formula),
        }
    }
}

enum Displayed<'a, L> {
    Literal(&'a Literal<L>),
    Clause(&'a Clause<L>),
    Formula(&'a CnfFormula<L>),
    Constant(bool),
}

/// An object dedicated to the display of a value in the format read by [`FormulaReader`](crate::FormulaReader).
///
/// Literals are written `x` or `-x`, clauses `or(x, -y)`, formulas `and(or(x, -y), z)`,
/// and the constants `true` and `false`.
/// Clauses made of a single literal and formulas made of a single clause are written without operator.
pub struct DefaultDisplay<'a, L> {
    value: Displayed<'a, L>,
}

impl<L> Display for DefaultDisplay<'_, L>
where
    L: LabelType + Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.value {
            Displayed::Literal(l) => write_literal(f, l),
            Displayed::Clause(c) => write_clause(f, c),
            Displayed::Formula(formula) => match formula.as_clauses() {
                [c] => write_clause(f, c),
                clauses => {
                    write!(f, "and(")?;
                    for (i, c) in clauses.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write_clause(f, c)?;
                    }
                    write!(f, ")")
                }
            },
            Displayed::Constant(b) => write!(f, "{}", b),
        }
    }
}

fn write_literal<L>(f: &mut Formatter<'_>, l: &Literal<L>) -> fmt::Result
where
    L: LabelType + Display,
{
    write!(f, "{}{}", if l.is_negated() { "-" } else { "" }, l.label())
}

fn write_clause<L>(f: &mut Formatter<'_>, c: &Clause<L>) -> fmt::Result
where
    L: LabelType + Display,
{
    match c.as_literals() {
        [l] => write_literal(f, l),
        literals => {
            write!(f, "or(")?;
            for (i, l) in literals.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write_literal(f, l)?;
            }
            write!(f, ")")
        }
    }
}

impl<L> Literal<L> {
    /// Returns an object dedicated to the display of this literal.
    ///
    /// See [`DefaultDisplay`] for the format.
    pub fn default_display(&self) -> DefaultDisplay<'_, L> {
        DefaultDisplay {
            value: Displayed::Literal(self),
        }
    }
}

impl<L> Clause<L> {
    /// Returns an object dedicated to the display of this clause.
    ///
    /// See [`DefaultDisplay`] for the format.
    pub fn default_display(&self) -> DefaultDisplay<'_, L> {
        DefaultDisplay {
            value: Displayed::Clause(self),
        }
    }
}

impl<L> CnfFormula<L> {
    /// Returns an object dedicated to the display of this formula.
    ///
    /// See [`DefaultDisplay`] for the format.
    pub fn default_display(&self) -> DefaultDisplay<'_, L> {
        DefaultDisplay {
            value: Displayed::Formula(self),
        }
    }
}

impl<L> BooleanFormula<L> {
    /// Returns an object dedicated to the display of this formula.
    ///
    /// # Examples
    ///
    /// ```
    /// use lite_cnf::{BooleanFormula, Literal};
    ///
    /// let f = (Literal::new("a") | !Literal::new("b")) & Literal::new("c");
    /// assert_eq!("and(or(a, -b), c)", format!("{}", f.default_display()));
    /// assert_eq!("-a", format!("{}", (!Literal::new("a")).default_display()));
    /// assert_eq!("true", format!("{}", BooleanFormula::<&str>::Tautology.default_display()));
    /// ```
    pub fn default_display(&self) -> DefaultDisplay<'_, L> {
        let value = match self {
            BooleanFormula::Tautology => Displayed::Constant(true),
            BooleanFormula::Contradiction => Displayed::Constant(false),
            BooleanFormula::Literal(l) => Displayed::Literal(l),
            BooleanFormula::Formula(f) => Displayed::Formula(f),
        };
        DefaultDisplay { value }
    }
}
