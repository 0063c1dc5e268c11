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

/// The result of a smart constructor which may collapse to a constant.
///
/// Building a [`Clause`](crate::Clause) or a [`CnfFormula`](crate::CnfFormula)
/// may reveal that the value is always true or always false;
/// in this case no structure is allocated and [`True`] or [`False`] is returned instead.
///
/// [`True`]: MaybeTrivial::True
/// [`False`]: MaybeTrivial::False
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MaybeTrivial<T> {
    /// A structured value
    NotTrivial(T),
    /// The tautology
    True,
    /// The contradiction
    False,
}

impl<T> MaybeTrivial<T> {
    /// Returns the structured value, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics if `self` is [`True`](MaybeTrivial::True) or [`False`](MaybeTrivial::False).
    pub fn unwrap(self) -> T {
        match self {
            MaybeTrivial::NotTrivial(t) => t,
            MaybeTrivial::True => panic!("cannot unwrap a trivially true value"),
            MaybeTrivial::False => panic!("cannot unwrap a trivially false value"),
        }
    }

    /// Converts into an [`Option`], discarding which constant was found.
    pub fn not_trivial(self) -> Option<T> {
        match self {
            MaybeTrivial::NotTrivial(t) => Some(t),
            _ => None,
        }
    }

    /// Returns `true` if this is the tautology.
    pub fn is_true(&self) -> bool {
        matches!(self, MaybeTrivial::True)
    }

    /// Returns `true` if this is the contradiction.
    pub fn is_false(&self) -> bool {
        matches!(self, MaybeTrivial::False)
    }

    /// Applies `mapper` to a structured value, keeping constants as they are.
    pub fn map<U, M>(self, mapper: M) -> MaybeTrivial<U>
    where
        M: FnOnce(T) -> U,
    {
        match self {
            MaybeTrivial::NotTrivial(t) => MaybeTrivial::NotTrivial(mapper(t)),
            MaybeTrivial::True => MaybeTrivial::True,
            MaybeTrivial::False => MaybeTrivial::False,
        }
    }

    /// Applies `mapper` to a structured value, which may itself collapse to a constant.
    pub fn and_then<U, M>(self, mapper: M) -> MaybeTrivial<U>
    where
        M: FnOnce(T) -> MaybeTrivial<U>,
    {
        match self {
            MaybeTrivial::NotTrivial(t) => mapper(t),
            MaybeTrivial::True => MaybeTrivial::True,
            MaybeTrivial::False => MaybeTrivial::False,
        }
    }
}

impl<T> From<bool> for MaybeTrivial<T> {
    fn from(b: bool) -> Self {
        if b {
            MaybeTrivial::True
        } else {
            MaybeTrivial::False
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap() {
        assert_eq!(3, MaybeTrivial::NotTrivial(3).unwrap());
    }

    #[test]
    #[should_panic(expected = "cannot unwrap a trivially true value")]
    fn test_unwrap_true() {
        MaybeTrivial::<usize>::True.unwrap();
    }

    #[test]
    #[should_panic(expected = "cannot unwrap a trivially false value")]
    fn test_unwrap_false() {
        MaybeTrivial::<usize>::False.unwrap();
    }

    #[test]
    fn test_not_trivial() {
        assert_eq!(Some(1), MaybeTrivial::NotTrivial(1).not_trivial());
        assert_eq!(None, MaybeTrivial::<usize>::True.not_trivial());
        assert_eq!(None, MaybeTrivial::<usize>::False.not_trivial());
    }

    #[test]
    fn test_map_keeps_constants() {
        let succ = |i: usize| i + 1;
        assert_eq!(MaybeTrivial::NotTrivial(1), MaybeTrivial::NotTrivial(0).map(succ));
        assert!(MaybeTrivial::<usize>::True.map(succ).is_true());
        assert!(MaybeTrivial::<usize>::False.map(succ).is_false());
    }

    #[test]
    fn test_and_then() {
        let collapse = |i: usize| match i {
            0 => MaybeTrivial::False,
            1 => MaybeTrivial::True,
            n => MaybeTrivial::NotTrivial(n),
        };
        assert!(MaybeTrivial::NotTrivial(0).and_then(collapse).is_false());
        assert!(MaybeTrivial::NotTrivial(1).and_then(collapse).is_true());
        assert_eq!(
            MaybeTrivial::NotTrivial(2),
            MaybeTrivial::NotTrivial(2).and_then(collapse)
        );
        assert!(MaybeTrivial::<usize>::True.and_then(collapse).is_true());
    }

    #[test]
    fn test_from_bool() {
        assert!(MaybeTrivial::<usize>::from(true).is_true());
        assert!(MaybeTrivial::<usize>::from(false).is_false());
    }
}
