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

use std::{fmt::Debug, hash::Hash};

/// The trait of the values that can be used as variable labels.
///
/// Any cloneable, totally ordered and hashable type is a label (strings, integers, ...).
/// The order is only used to store clauses and formulas in a canonical way.
pub trait LabelType: Clone + Debug + Eq + Hash + Ord {}

impl<T> LabelType for T where T: Clone + Debug + Eq + Hash + Ord {}

/// A literal, composed by a label and a negation flag.
///
/// # Order
///
/// Literals are ordered by label first, then by negation flag (positive literals first).
/// This places a literal and its negation next to each other in sorted collections.
///
/// # Examples
///
/// ```
/// use lite_cnf::Literal;
///
/// let x = Literal::new("x");
/// let not_x = x.negate();
/// assert!(not_x.is_negated());
/// assert!(x.is_negation_of(&not_x));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal<L> {
    label: L,
    negated: bool,
}

impl<L> Literal<L>
where
    L: LabelType,
{
    /// Builds a positive literal.
    pub fn new(label: L) -> Self {
        Literal {
            label,
            negated: false,
        }
    }

    /// Builds a literal given its label and whether it is negated.
    ///
    /// # Examples
    ///
    /// ```
    /// use lite_cnf::Literal;
    ///
    /// assert_eq!(Literal::new(0).negate(), Literal::with_negation(0, true));
    /// ```
    pub fn with_negation(label: L, negated: bool) -> Self {
        Literal { label, negated }
    }

    /// Returns the negation of this literal, as a new `Literal`.
    pub fn negate(&self) -> Self {
        Literal {
            label: self.label.clone(),
            negated: !self.negated,
        }
    }

    /// Checks if a literal is the negation of this literal.
    pub fn is_negation_of(&self, other: &Literal<L>) -> bool {
        self.negated != other.negated && self.label == other.label
    }

    /// Returns the label of this literal.
    pub fn label(&self) -> &L {
        &self.label
    }

    /// Returns `true` iff this literal is negated.
    pub fn is_negated(&self) -> bool {
        self.negated
    }
}

impl<L> From<L> for Literal<L>
where
    L: LabelType,
{
    fn from(label: L) -> Self {
        Literal::new(label)
    }
}

/// A sorted vector of literals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct LiteralVec<L>(Vec<Literal<L>>);

impl<L> LiteralVec<L>
where
    L: LabelType,
{
    pub(crate) fn new(mut literals: Vec<Literal<L>>) -> Self {
        literals.sort_unstable();
        LiteralVec(literals)
    }

    /// Removes the duplicated literals.
    ///
    /// Returns `None` if the vector contains a literal and its negation.
    pub(crate) fn clean(self) -> Option<Self> {
        let mut literals = self.0;
        literals.dedup();
        if literals.windows(2).any(|w| w[0].is_negation_of(&w[1])) {
            return None;
        }
        Some(LiteralVec(literals))
    }

    pub(crate) fn into_vec(self) -> Vec<Literal<L>> {
        self.0
    }
}

impl<L> std::iter::FromIterator<Literal<L>> for LiteralVec<L>
where
    L: LabelType,
{
    fn from_iter<I: IntoIterator<Item = Literal<L>>>(iter: I) -> Self {
        LiteralVec::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::Hasher;

    fn hash_of<T: Hash>(t: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        t.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_negate() {
        let lit = Literal::new("x");
        assert!(!lit.is_negated());
        assert!(lit.negate().is_negated());
        assert_eq!(lit, lit.negate().negate());
        assert_eq!(&"x", lit.negate().label());
    }

    #[test]
    fn test_eq() {
        assert_eq!(Literal::new("x"), Literal::new("x"));
        assert_ne!(Literal::new("x"), Literal::new("y"));
        assert_ne!(Literal::new("x"), Literal::new("x").negate());
    }

    #[test]
    fn test_hash() {
        assert_eq!(hash_of(&Literal::new("x")), hash_of(&Literal::new("x")));
        assert_ne!(hash_of(&Literal::new("x")), hash_of(&Literal::new("y")));
        assert_ne!(
            hash_of(&Literal::new("x")),
            hash_of(&Literal::new("x").negate())
        );
    }

    #[test]
    fn test_sort() {
        let v = LiteralVec::new(vec![
            Literal::with_negation(1, true),
            Literal::with_negation(1, false),
            Literal::with_negation(0, true),
            Literal::with_negation(0, false),
        ]);
        assert_eq!(
            vec![
                Literal::with_negation(0, false),
                Literal::with_negation(0, true),
                Literal::with_negation(1, false),
                Literal::with_negation(1, true),
            ],
            v.into_vec()
        );
    }

    #[test]
    fn test_clean_removes_duplicates() {
        let v: LiteralVec<_> = vec![Literal::new(1), Literal::new(0), Literal::new(1)]
            .into_iter()
            .collect();
        assert_eq!(
            vec![Literal::new(0), Literal::new(1)],
            v.clean().unwrap().into_vec()
        );
    }

    #[test]
    fn test_clean_detects_complementary_literals() {
        let v: LiteralVec<_> = vec![Literal::new(2), Literal::new(1), Literal::new(2).negate()]
            .into_iter()
            .collect();
        assert_eq!(None, v.clean());
    }

    #[test]
    fn test_clean_empty() {
        let v = LiteralVec::<usize>::new(vec![]);
        assert!(v.clean().unwrap().into_vec().is_empty());
    }
}
