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

//! Boolean operators over loosely-typed operands.
//!
//! The functions of this module accept any `'static` value as operand.
//! Operands that are not formulas (namely [`BooleanFormula`], [`CnfFormula`], [`Clause`], [`Literal`] or `bool`)
//! are rejected with an [`InvalidOperand`] error.

use crate::{BooleanFormula, Clause, CnfFormula, LabelType, Literal, MaybeTrivial};
use std::{
    any::{type_name, Any},
    error::Error,
    fmt::{self, Display, Formatter},
};

/// The error returned when an operand of a Boolean operator is not a formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidOperand {
    operator: &'static str,
    lhs: &'static str,
    rhs: &'static str,
}

impl InvalidOperand {
    fn new<A, B>(operator: &'static str) -> Self {
        InvalidOperand {
            operator,
            lhs: type_name::<A>(),
            rhs: type_name::<B>(),
        }
    }

    /// Returns the symbol of the operator the operands were given to.
    pub fn operator(&self) -> &'static str {
        self.operator
    }

    /// Returns the name of the type of the left-hand side operand.
    pub fn lhs_type(&self) -> &'static str {
        self.lhs
    }

    /// Returns the name of the type of the right-hand side operand.
    pub fn rhs_type(&self) -> &'static str {
        self.rhs
    }
}

impl Display for InvalidOperand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported operand type(s) for {}: '{}' and '{}'",
            self.operator, self.lhs, self.rhs
        )
    }
}

impl Error for InvalidOperand {}

fn as_formula<L>(value: &dyn Any) -> Option<BooleanFormula<L>>
where
    L: LabelType + 'static,
{
    if let Some(f) = value.downcast_ref::<BooleanFormula<L>>() {
        Some(f.clone())
    } else if let Some(l) = value.downcast_ref::<Literal<L>>() {
        Some(l.clone().into())
    } else if let Some(f) = value.downcast_ref::<CnfFormula<L>>() {
        Some(f.clone().into())
    } else if let Some(c) = value.downcast_ref::<Clause<L>>() {
        Some(MaybeTrivial::NotTrivial(c.clone()).into())
    } else {
        value.downcast_ref::<bool>().map(|b| (*b).into())
    }
}

fn apply<L, A, B, F>(
    operator: &'static str,
    lhs: &A,
    rhs: &B,
    op: F,
) -> Result<BooleanFormula<L>, InvalidOperand>
where
    L: LabelType + 'static,
    A: Any,
    B: Any,
    F: FnOnce(BooleanFormula<L>, BooleanFormula<L>) -> BooleanFormula<L>,
{
    match (as_formula(lhs), as_formula(rhs)) {
        (Some(a), Some(b)) => Ok(op(a, b)),
        _ => Err(InvalidOperand::new::<A, B>(operator)),
    }
}

/// Computes the conjunction of two operands.
///
/// # Examples
///
/// ```
/// use lite_cnf::{dynamic, Literal};
///
/// let x = Literal::new("x");
/// assert_eq!(Ok(x.clone() & true), dynamic::try_and(&x, &true));
/// assert!(dynamic::try_and::<&str, _, _>(&x, &"not-a-formula").is_err());
/// ```
pub fn try_and<L, A, B>(lhs: &A, rhs: &B) -> Result<BooleanFormula<L>, InvalidOperand>
where
    L: LabelType + 'static,
    A: Any,
    B: Any,
{
    apply("&", lhs, rhs, BooleanFormula::and)
}

/// Computes the disjunction of two operands.
pub fn try_or<L, A, B>(lhs: &A, rhs: &B) -> Result<BooleanFormula<L>, InvalidOperand>
where
    L: LabelType + 'static,
    A: Any,
    B: Any,
{
    apply("|", lhs, rhs, BooleanFormula::or)
}

/// Computes the exclusive disjunction of two operands.
pub fn try_xor<L, A, B>(lhs: &A, rhs: &B) -> Result<BooleanFormula<L>, InvalidOperand>
where
    L: LabelType + 'static,
    A: Any,
    B: Any,
{
    apply("^", lhs, rhs, BooleanFormula::xor)
}

/// Returns `true` iff the value is a formula over labels of type `L`.
///
/// Formulas are values of type [`CnfFormula`] and [`Literal`], and the [`BooleanFormula`] values wrapping one of them.
/// The constants [`BooleanFormula::Tautology`] and [`BooleanFormula::Contradiction`] are not formulas,
/// and neither are native Booleans, although both are accepted as operands.
pub fn is_boolean_formula<L, T>(value: &T) -> bool
where
    L: LabelType + 'static,
    T: Any,
{
    let value = value as &dyn Any;
    if let Some(f) = value.downcast_ref::<BooleanFormula<L>>() {
        return f.is_boolean_formula();
    }
    value.is::<CnfFormula<L>>() || value.is::<Literal<L>>()
}
