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

use crate::{Clause, CnfFormula, LabelType, Literal, MaybeTrivial, Negation};
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// Any value handled by the algebra: a literal, a CNF formula or one of the two constants.
///
/// Values are always normalized:
/// a formula made of a single unit clause is represented by its literal,
/// and trivial formulas are represented by [`Tautology`](BooleanFormula::Tautology)
/// and [`Contradiction`](BooleanFormula::Contradiction).
/// As a consequence, two values obtained by the same operations in a different order
/// are equal and have the same hash.
///
/// The connectives are available as operators (`&`, `|`, `^`, `!`)
/// and as the methods [`and`](BooleanFormula::and), [`or`](BooleanFormula::or) and [`xor`](BooleanFormula::xor).
/// The right-hand side may be anything convertible into a `BooleanFormula`,
/// including a `bool` which stands for the corresponding constant.
///
/// # Examples
///
/// ```
/// use lite_cnf::{BooleanFormula, Literal};
///
/// let x = Literal::new("x");
/// let y = Literal::new("y");
/// assert_eq!(x.clone() & y.clone(), y.clone() & x.clone());
/// assert_eq!(BooleanFormula::Contradiction, x.clone() & !x.clone());
/// assert_eq!(BooleanFormula::Tautology, x.clone() | !x.clone());
/// assert_eq!(BooleanFormula::from(x.clone()), x.clone() & true);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum BooleanFormula<L> {
    /// The formula that is always true
    Tautology,
    /// The formula that is always false
    Contradiction,
    /// A single literal
    Literal(Literal<L>),
    /// A formula with at least two literals
    Formula(CnfFormula<L>),
}

impl<L> BooleanFormula<L>
where
    L: LabelType,
{
    /// Returns `true` if this value is a literal or a formula, `false` for the constants.
    pub fn is_boolean_formula(&self) -> bool {
        matches!(self, BooleanFormula::Literal(_) | BooleanFormula::Formula(_))
    }

    /// Returns `true` if this value is the tautology.
    pub fn is_tautology(&self) -> bool {
        matches!(self, BooleanFormula::Tautology)
    }

    /// Returns `true` if this value is the contradiction.
    pub fn is_contradiction(&self) -> bool {
        matches!(self, BooleanFormula::Contradiction)
    }

    /// Returns the literal if this value is a single literal.
    pub fn as_literal(&self) -> Option<&Literal<L>> {
        match self {
            BooleanFormula::Literal(l) => Some(l),
            _ => None,
        }
    }

    /// Returns the formula if this value is a formula with at least two literals.
    pub fn as_formula(&self) -> Option<&CnfFormula<L>> {
        match self {
            BooleanFormula::Formula(f) => Some(f),
            _ => None,
        }
    }

    /// Returns the clauses of a literal or a formula, `None` for the constants.
    ///
    /// A literal is seen as a formula made of a single unit clause.
    pub fn into_clauses(self) -> Option<Vec<Clause<L>>> {
        match self {
            BooleanFormula::Literal(l) => Some(vec![Clause::unit(l)]),
            BooleanFormula::Formula(f) => Some(f.into_clauses()),
            BooleanFormula::Tautology | BooleanFormula::Contradiction => None,
        }
    }

    /// Computes the conjunction of two values.
    ///
    /// The clauses of both operands are gathered and the result is built again.
    pub fn and<R>(self, rhs: R) -> Self
    where
        R: Into<BooleanFormula<L>>,
    {
        match (self, rhs.into()) {
            (BooleanFormula::Contradiction, _) | (_, BooleanFormula::Contradiction) => {
                BooleanFormula::Contradiction
            }
            (BooleanFormula::Tautology, f) | (f, BooleanFormula::Tautology) => f,
            (lhs, rhs) => match (lhs.into_clauses(), rhs.into_clauses()) {
                (Some(lhs_clauses), Some(rhs_clauses)) => {
                    CnfFormula::build(lhs_clauses.into_iter().chain(rhs_clauses)).into()
                }
                _ => unreachable!(), // kcov-ignore
            },
        }
    }

    /// Computes the disjunction of two values.
    ///
    /// The disjunction is distributed over the conjunctions:
    /// each clause of the left operand is disjoined with each clause of the right one.
    /// The tautological disjunctions are discarded; if none remains, the result is the tautology.
    pub fn or<R>(self, rhs: R) -> Self
    where
        R: Into<BooleanFormula<L>>,
    {
        match (self, rhs.into()) {
            (BooleanFormula::Contradiction, f) | (f, BooleanFormula::Contradiction) => f,
            (BooleanFormula::Tautology, _) | (_, BooleanFormula::Tautology) => {
                BooleanFormula::Tautology
            }
            (lhs, rhs) => match (lhs.into_clauses(), rhs.into_clauses()) {
                (Some(lhs_clauses), Some(rhs_clauses)) => {
                    let product = lhs_clauses
                        .iter()
                        .flat_map(|x| rhs_clauses.iter().map(move |y| x.disjoin(y)))
                        .filter(|c| !c.is_true())
                        .collect::<Vec<MaybeTrivial<Clause<L>>>>();
                    if product.is_empty() {
                        BooleanFormula::Tautology
                    } else {
                        CnfFormula::build(product).into()
                    }
                }
                _ => unreachable!(), // kcov-ignore
            },
        }
    }

    /// Computes the exclusive disjunction of two values, as `(a | b) & !(a & b)`.
    pub fn xor<R>(self, rhs: R) -> Self
    where
        R: Into<BooleanFormula<L>>,
    {
        let rhs = rhs.into();
        let either = self.clone().or(rhs.clone());
        let both = self.and(rhs);
        either.and(both.negate())
    }
}

impl<L> Negation<BooleanFormula<L>> for BooleanFormula<L>
where
    L: LabelType,
{
    fn negate(self) -> BooleanFormula<L> {
        match self {
            BooleanFormula::Tautology => BooleanFormula::Contradiction,
            BooleanFormula::Contradiction => BooleanFormula::Tautology,
            BooleanFormula::Literal(l) => BooleanFormula::Literal(l.negate()),
            BooleanFormula::Formula(f) => f.negate(),
        }
    }
}

impl<L> From<bool> for BooleanFormula<L> {
    fn from(b: bool) -> Self {
        if b {
            BooleanFormula::Tautology
        } else {
            BooleanFormula::Contradiction
        }
    }
}

impl<L> From<Literal<L>> for BooleanFormula<L> {
    fn from(l: Literal<L>) -> Self {
        BooleanFormula::Literal(l)
    }
}

impl<L> From<CnfFormula<L>> for BooleanFormula<L>
where
    L: LabelType,
{
    fn from(f: CnfFormula<L>) -> Self {
        match f.single_literal() {
            Some(l) => BooleanFormula::Literal(l.clone()),
            None => BooleanFormula::Formula(f),
        }
    }
}

impl<L> From<MaybeTrivial<CnfFormula<L>>> for BooleanFormula<L>
where
    L: LabelType,
{
    fn from(f: MaybeTrivial<CnfFormula<L>>) -> Self {
        match f {
            MaybeTrivial::NotTrivial(f) => BooleanFormula::from(f),
            MaybeTrivial::True => BooleanFormula::Tautology,
            MaybeTrivial::False => BooleanFormula::Contradiction,
        }
    }
}

impl<L> From<MaybeTrivial<Clause<L>>> for BooleanFormula<L>
where
    L: LabelType,
{
    fn from(c: MaybeTrivial<Clause<L>>) -> Self {
        BooleanFormula::from(CnfFormula::build(vec![c]))
    }
}

impl<L> PartialEq<bool> for BooleanFormula<L> {
    fn eq(&self, other: &bool) -> bool {
        matches!(
            (self, other),
            (BooleanFormula::Tautology, true) | (BooleanFormula::Contradiction, false)
        )
    }
}

macro_rules! binary_operator_impl {
    ($op_trait:ident, $op_fn:ident, $method:ident) => {
        impl<L, R> $op_trait<R> for BooleanFormula<L>
        where
            L: LabelType,
            R: Into<BooleanFormula<L>>,
        {
            type Output = BooleanFormula<L>;

            fn $op_fn(self, rhs: R) -> Self::Output {
                self.$method(rhs)
            }
        }

        impl<L, R> $op_trait<R> for Literal<L>
        where
            L: LabelType,
            R: Into<BooleanFormula<L>>,
        {
            type Output = BooleanFormula<L>;

            fn $op_fn(self, rhs: R) -> Self::Output {
                BooleanFormula::from(self).$method(rhs)
            }
        }

        impl<L> $op_trait<BooleanFormula<L>> for bool
        where
            L: LabelType,
        {
            type Output = BooleanFormula<L>;

            fn $op_fn(self, rhs: BooleanFormula<L>) -> Self::Output {
                BooleanFormula::from(self).$method(rhs)
            }
        }

        impl<L> $op_trait<Literal<L>> for bool
        where
            L: LabelType,
        {
            type Output = BooleanFormula<L>;

            fn $op_fn(self, rhs: Literal<L>) -> Self::Output {
                BooleanFormula::from(self).$method(rhs)
            }
        }
    };
}

binary_operator_impl!(BitAnd, bitand, and);
binary_operator_impl!(BitOr, bitor, or);
binary_operator_impl!(BitXor, bitxor, xor);

impl<L> Not for BooleanFormula<L>
where
    L: LabelType,
{
    type Output = BooleanFormula<L>;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl<L> Not for Literal<L>
where
    L: LabelType,
{
    type Output = Literal<L>;

    fn not(self) -> Self::Output {
        Literal::negate(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    type F = BooleanFormula<&'static str>;

    fn l(label: &'static str) -> Literal<&'static str> {
        Literal::new(label)
    }

    fn hash_of<T: Hash>(t: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        t.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_literal_and_itself() {
        assert_eq!(F::from(l("x")), l("x") & l("x"));
        assert_eq!(F::from(l("x")), l("x") | l("x"));
    }

    #[test]
    fn test_contradiction_detection() {
        assert_eq!(F::Contradiction, l("x") & !l("x"));
        assert!((l("x") & !l("x")).is_contradiction());
    }

    #[test]
    fn test_tautology_detection() {
        assert_eq!(F::Tautology, l("x") | !l("x"));
        assert!((l("x") | !l("x")).is_tautology());
    }

    #[test]
    fn test_and_commutative() {
        let lhs = l("x") & l("y") & l("z");
        let rhs = l("z") & l("y") & l("x");
        assert_eq!(lhs, rhs);
        assert_eq!(hash_of(&lhs), hash_of(&rhs));
    }

    #[test]
    fn test_or_commutative() {
        let lhs = l("x") | l("y") | l("z");
        let rhs = l("z") | l("y") | l("x");
        assert_eq!(lhs, rhs);
        assert_eq!(hash_of(&lhs), hash_of(&rhs));
    }

    #[test]
    fn test_hash_differs() {
        assert_ne!(hash_of(&(l("a") & l("b"))), hash_of(&(l("x") & l("y"))));
    }

    #[test]
    fn test_disjunction_over_conjunction() {
        assert_eq!(
            l("x") | (l("y") & l("z")),
            (l("x") | l("y")) & (l("x") | l("z"))
        );
    }

    #[test]
    fn test_conjunction_over_disjunction() {
        assert_eq!(
            l("x") & (l("y") | l("z")),
            (l("x") & l("y")) | (l("x") & l("z"))
        );
    }

    #[test]
    fn test_de_morgan() {
        assert_eq!(!(l("x") & l("y")), !l("x") | !l("y"));
        assert_eq!(!(l("x") | l("y")), !l("x") & !l("y"));
    }

    #[test]
    fn test_double_negation() {
        assert_eq!(l("x"), !!l("x"));
        let f = l("x") | l("y");
        assert_eq!(f.clone(), !!f);
        let g = l("x") & !l("y");
        assert_eq!(g.clone(), !!g);
        let h = (l("a") | l("b")) & (l("c") | l("d"));
        assert_eq!(h.clone(), !!h);
    }

    #[test]
    fn test_double_negation_adds_resolvent() {
        let f = (l("a") | l("b")) & (!l("a") | l("c"));
        let expected = f.clone() & (l("b") | l("c"));
        assert_eq!(expected, !!f);
    }

    #[test]
    fn test_negate_constants() {
        assert_eq!(F::Contradiction, !F::Tautology);
        assert_eq!(F::Tautology, !F::Contradiction);
    }

    #[test]
    fn test_constants_absorption() {
        let f = l("x") | l("y");
        for x in vec![F::from(l("x")), f] {
            assert_eq!(x.clone(), F::Tautology & x.clone());
            assert_eq!(x.clone(), x.clone() & F::Tautology);
            assert_eq!(F::Contradiction, F::Contradiction & x.clone());
            assert_eq!(F::Contradiction, x.clone() & F::Contradiction);
            assert_eq!(F::Tautology, F::Tautology | x.clone());
            assert_eq!(F::Tautology, x.clone() | F::Tautology);
            assert_eq!(x.clone(), F::Contradiction | x.clone());
            assert_eq!(x.clone(), x.clone() | F::Contradiction);
        }
    }

    #[test]
    fn test_native_booleans() {
        assert_eq!(F::from(l("x")), l("x") & true);
        assert_eq!(F::from(l("x")), true & l("x"));
        assert_eq!(F::Contradiction, l("x") & false);
        assert_eq!(F::Tautology, false | F::Tautology);
        assert!(F::Tautology == true);
        assert!(F::Contradiction == false);
        assert!(F::Contradiction != true);
        assert!(F::from(l("x")) != true);
        assert!(F::from(l("x")) != false);
    }

    #[test]
    fn test_xor_truth_table() {
        assert_eq!(F::Contradiction, l("x") ^ l("x"));
        assert_eq!(F::Tautology, l("x") ^ !l("x"));
        let f = l("a") & (l("b") | l("c"));
        assert_eq!(f.clone(), f.clone() ^ F::Contradiction);
        assert_eq!(!f.clone(), f.clone() ^ F::Tautology);
        assert_eq!(f.clone(), f.clone() ^ false);
        assert_eq!(!f.clone(), true ^ f);
    }

    #[test]
    fn test_xor_literals() {
        assert_eq!(
            (l("x") | l("y")) & (!l("x") | !l("y")),
            l("x") ^ l("y")
        );
    }

    #[test]
    fn test_or_collapses_to_tautology() {
        let f = l("x") & l("y");
        let g = !l("x") | !l("y");
        assert_eq!(F::Tautology, f | g);
    }

    #[test]
    fn test_guards() {
        assert!(F::from(l("x")).is_boolean_formula());
        assert!((l("x") & l("y")).is_boolean_formula());
        assert!(!F::Tautology.is_boolean_formula());
        assert!(!F::Contradiction.is_boolean_formula());
        assert_eq!(Some(&l("x")), F::from(l("x")).as_literal());
        assert!((l("x") & l("y")).as_formula().is_some());
        assert!(F::from(l("x")).as_formula().is_none());
    }

    #[test]
    fn test_round_trip_scenario() {
        let f = (l("a") | l("b")) & (!l("a") | l("c"));
        assert_eq!(2, f.as_formula().unwrap().n_clauses());
        let g = f & l("a");
        assert_eq!(l("a") & l("c"), g);
    }
}
