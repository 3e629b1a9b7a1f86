//! Variables and sets of variables

use bit_set::BitSet;
use std::fmt;

/// A single Boolean input, identified by its position in the variable ordering.
///
/// Variables are cheap copyable handles. On their own they only carry the
/// position; the associated name lives in the [ordering](crate::VarOrder)
/// that issued them.
#[derive(Clone, Copy, Default, Debug, Eq, Hash, PartialEq)]
pub struct Variable(pub(crate) usize);

impl Variable {
    /// Create a variable for a specific position
    pub fn new(uid: usize) -> Self {
        Self(uid)
    }

    /// Return the position in the variable ordering
    pub fn uid(&self) -> usize {
        self.0
    }
}

impl From<usize> for Variable {
    fn from(uid: usize) -> Self {
        Self(uid)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_{}_", self.0)
    }
}

/// A set of variables with efficient bitwise operations.
///
/// A VarSet is a thin abstraction over [BitSet]. It backs the fixed
/// positions of [terms](crate::Term) and the active variables of
/// [states](crate::State), so that the merge, cover and evaluation
/// predicates all reduce to bitwise tests.
///
/// ```
/// use minkit::{Variable, VarSet};
///
/// let mut vs = VarSet::default();
/// vs.insert(Variable::from(1));
/// vs.insert(Variable::from(3));
/// vs.remove(Variable::from(3));
///
/// # assert!(!vs.contains(Variable::from(0)));
/// # assert!( vs.contains(Variable::from(1)));
/// # assert!(!vs.contains(Variable::from(3)));
/// ```
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct VarSet {
    variables: BitSet,
}

impl VarSet {
    /// Add the given variable to this set
    pub fn insert(&mut self, var: Variable) {
        self.variables.insert(var.uid());
    }

    /// Remove the given variable from this set
    pub fn remove(&mut self, var: Variable) {
        self.variables.remove(var.uid());
    }

    /// Test if a specific variable is part of this set
    pub fn contains(&self, var: Variable) -> bool {
        self.variables.contains(var.uid())
    }

    /// Add all variables from the other set
    pub fn union_with(&mut self, vars: &Self) {
        self.variables.union_with(&vars.variables);
    }

    /// Return true if this set contains all variables of the other set
    pub fn contains_all(&self, other: &Self) -> bool {
        self.variables.is_superset(&other.variables)
    }

    /// Return true if the two sets have no common variable
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.variables.is_disjoint(&other.variables)
    }

    /// Return the number of variables in this set
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Return whether there is no variable in this set
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Create an iterator over the contained variables
    pub fn iter(&self) -> Iter {
        self.into_iter()
    }

    /// Iterate over the variables contained in exactly one of the two sets
    pub fn symmetric_difference<'a>(&'a self, other: &'a Self) -> SymmetricDifference<'a> {
        SymmetricDifference(self.variables.symmetric_difference(&other.variables))
    }
}

impl FromIterator<Variable> for VarSet {
    fn from_iter<I: IntoIterator<Item = Variable>>(iter: I) -> Self {
        let mut vs = VarSet::default();
        for v in iter {
            vs.insert(v);
        }
        vs
    }
}

/// Iterate over variables in a [VarSet]
pub struct Iter<'a>(bit_set::Iter<'a, u32>);

impl Iterator for Iter<'_> {
    type Item = Variable;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Variable::from)
    }
}

impl<'a> IntoIterator for &'a VarSet {
    type Item = Variable;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.variables.iter())
    }
}

/// Iterate over the symmetric difference of two [VarSet]s
pub struct SymmetricDifference<'a>(bit_set::SymmetricDifference<'a, u32>);

impl Iterator for SymmetricDifference<'_> {
    type Item = Variable;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Variable::from)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn set_operations() {
        let a = VarSet::from_iter([0, 1, 3].map(Variable::from));
        let b = VarSet::from_iter([0, 2, 3].map(Variable::from));

        assert_eq!(a.len(), 3);
        assert!(a.contains(Variable::from(1)));
        assert!(!a.contains(Variable::from(2)));

        let mut union = a.clone();
        union.union_with(&b);
        assert_eq!(union.len(), 4);
        assert!(union.contains_all(&a));
        assert!(union.contains_all(&b));
        assert!(!a.contains_all(&b));

        let diff: Vec<usize> = a.symmetric_difference(&b).map(|v| v.uid()).collect();
        assert_eq!(diff, vec![1, 2]);

        assert!(!a.is_disjoint(&b));
        assert!(a.is_disjoint(&VarSet::from_iter([2, 5].map(Variable::from))));
    }
}
