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

use crate::{BooleanFormula, Clause, CnfFormula, LabelType, Literal, Negation};

/// A trait for values in which the occurrences of a label can be replaced by a formula.
pub trait Substitution<L> {
    /// Replaces the occurrences of `label` by `replacement`.
    ///
    /// Positive occurrences are replaced by `replacement`,
    /// negative ones by its negation.
    /// The result is normalized again, so it may be a literal or a constant.
    ///
    /// # Examples
    ///
    /// ```
    /// use lite_cnf::{BooleanFormula, Literal, Substitution};
    ///
    /// let f = Literal::new("a") & Literal::new("b");
    /// let r = Literal::new("c") | Literal::new("d");
    /// assert_eq!(Literal::new("b") & r.clone(), f.substitute(&"a", &r));
    /// assert_eq!(BooleanFormula::Contradiction, f.substitute(&"b", &false.into()));
    /// ```
    fn substitute(&self, label: &L, replacement: &BooleanFormula<L>) -> BooleanFormula<L>;
}

impl<L> Substitution<L> for Literal<L>
where
    L: LabelType,
{
    fn substitute(&self, label: &L, replacement: &BooleanFormula<L>) -> BooleanFormula<L> {
        if self.label() != label {
            BooleanFormula::Literal(self.clone())
        } else if self.is_negated() {
            replacement.clone().negate()
        } else {
            replacement.clone()
        }
    }
}

impl<L> Substitution<L> for Clause<L>
where
    L: LabelType,
{
    fn substitute(&self, label: &L, replacement: &BooleanFormula<L>) -> BooleanFormula<L> {
        let mut result = BooleanFormula::Contradiction;
        for l in self.as_literals() {
            result = result.or(l.substitute(label, replacement));
            if result.is_tautology() {
                break;
            }
        }
        result
    }
}

impl<L> Substitution<L> for CnfFormula<L>
where
    L: LabelType,
{
    fn substitute(&self, label: &L, replacement: &BooleanFormula<L>) -> BooleanFormula<L> {
        let mut result = BooleanFormula::Tautology;
        for c in self.as_clauses() {
            result = result.and(c.substitute(label, replacement));
            if result.is_contradiction() {
                break;
            }
        }
        result
    }
}

impl<L> Substitution<L> for BooleanFormula<L>
where
    L: LabelType,
{
    fn substitute(&self, label: &L, replacement: &BooleanFormula<L>) -> BooleanFormula<L> {
        match self {
            BooleanFormula::Literal(l) => l.substitute(label, replacement),
            BooleanFormula::Formula(f) => f.substitute(label, replacement),
            BooleanFormula::Tautology | BooleanFormula::Contradiction => self.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type F = BooleanFormula<&'static str>;

    fn l(label: &'static str) -> Literal<&'static str> {
        Literal::new(label)
    }

    #[test]
    fn test_substitute_other_label() {
        assert_eq!(F::from(l("x")), l("x").substitute(&"y", &F::Tautology));
    }

    #[test]
    fn test_substitute_and() {
        let r = l("y") & l("z");
        assert_eq!(r.clone(), l("x").substitute(&"x", &r));
    }

    #[test]
    fn test_negated_substitute_and() {
        let r = l("y") & l("z");
        assert_eq!(!l("y") | !l("z"), (!l("x")).substitute(&"x", &r));
    }

    #[test]
    fn test_substitute_or() {
        let r = l("y") | l("z");
        assert_eq!(r.clone(), l("x").substitute(&"x", &r));
    }

    #[test]
    fn test_negated_substitute_or() {
        let r = l("y") | l("z");
        assert_eq!(!l("y") & !l("z"), (!l("x")).substitute(&"x", &r));
    }

    #[test]
    fn test_substitute_constants() {
        assert_eq!(F::Tautology, l("x").substitute(&"x", &true.into()));
        assert_eq!(F::Contradiction, (!l("x")).substitute(&"x", &true.into()));
        assert_eq!(F::Tautology, F::Tautology.substitute(&"x", &l("y").into()));
    }

    #[test]
    fn test_formula_substitute_conjunction_into_conjunction() {
        assert_eq!(
            l("b") & l("d") & l("c"),
            (l("a") & l("b")).substitute(&"a", &(l("c") & l("d")))
        );
    }

    #[test]
    fn test_formula_substitute_conjunction_into_disjunction() {
        assert_eq!(
            l("b") | (l("d") & l("c")),
            (l("a") | l("b")).substitute(&"a", &(l("c") & l("d")))
        );
    }

    #[test]
    fn test_formula_substitute_disjunction_into_disjunction() {
        assert_eq!(
            l("b") | l("d") | l("c"),
            (l("a") | l("b")).substitute(&"a", &(l("c") | l("d")))
        );
    }

    #[test]
    fn test_formula_substitute_disjunction_into_conjunction() {
        assert_eq!(
            l("b") & (l("d") | l("c")),
            (l("a") & l("b")).substitute(&"a", &(l("c") | l("d")))
        );
    }

    #[test]
    fn test_clause_becomes_true() {
        let f = (l("a") | l("b")) & (l("c") | l("d"));
        assert_eq!(l("c") | l("d"), f.substitute(&"b", &true.into()));
    }

    #[test]
    fn test_clause_becomes_false() {
        let f = (l("a") | l("b")) & l("c");
        assert_eq!(F::Contradiction, f.substitute(&"c", &false.into()));
    }

    #[test]
    fn test_substitution_removes_clause() {
        let f = (l("a") | l("b")) & (!l("a") | l("c"));
        assert_eq!(l("b") | l("c"), f.substitute(&"a", &l("c").into()));
    }

    #[test]
    fn test_propagation_after_substitution() {
        let f = (l("a") | l("b")) & (!l("a") | l("c"));
        assert_eq!(l("a") & l("c"), f.substitute(&"b", &false.into()));
    }

    #[test]
    fn test_substitute_by_same_label() {
        let f = (l("a") | l("b")) & (!l("a") | l("c"));
        assert_eq!(f.clone(), f.substitute(&"a", &l("a").into()));
    }
}
