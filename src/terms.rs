//! Ordered, duplicate-free collections of terms.

use crate::*;

use std::slice::Iter;
use std::str::FromStr;
use std::vec::IntoIter;

static TERM_SEPARATORS: [char; 4] = [',', ';', '|', '\n'];

/// An insertion-ordered set of terms.
///
/// Duplicates are rejected on insertion, so the collection behaves as a set
/// for the correctness logic, while iteration follows the insertion order to
/// keep every rendered artifact reproducible across runs. Note that a term
/// covered by another term of the set is NOT removed: the minimization
/// rounds decide themselves when a term stops being useful.
///
/// As a Boolean rule, a set of terms is the disjunction of its members: it
/// [evaluates](Evaluate) to true on a state if at least one term does.
///
/// ```
/// use minkit::TermSet;
/// # use minkit::MinkitError;
/// # fn main() -> Result<(), MinkitError> {
///
/// let terms: TermSet = "0-10 ; 0-11 ; 0-10".parse()?;
/// assert_eq!(terms.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct TermSet {
    terms: Vec<Term>,
}

impl TermSet {
    /// Add a term at the end of the set, unless it is already present.
    ///
    /// Return whether the set changed.
    pub fn insert(&mut self, term: Term) -> bool {
        if self.contains(&term) {
            return false;
        }
        self.terms.push(term);
        true
    }

    /// Test if the exact same term is already part of this set
    pub fn contains(&self, term: &Term) -> bool {
        self.terms.iter().any(|t| t == term)
    }

    /// Iterate over the terms, in insertion order
    pub fn iter(&self) -> Iter<'_, Term> {
        self.terms.iter()
    }

    /// Get the number of terms in this set
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Return whether there is no term (the rule is always false)
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl FromIterator<Term> for TermSet {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        let mut terms = TermSet::default();
        for t in iter {
            terms.insert(t);
        }
        terms
    }
}

impl Extend<Term> for TermSet {
    fn extend<I: IntoIterator<Item = Term>>(&mut self, iter: I) {
        for t in iter {
            self.insert(t);
        }
    }
}

impl<'a> IntoIterator for &'a TermSet {
    type Item = &'a Term;
    type IntoIter = Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl IntoIterator for TermSet {
    type Item = Term;
    type IntoIter = IntoIter<Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl FromStr for TermSet {
    type Err = MinkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut result = TermSet::default();
        for elt in s.split(&TERM_SEPARATORS[..]) {
            if elt.trim().is_empty() {
                continue;
            }
            result.insert(elt.parse()?);
        }
        Ok(result)
    }
}

impl Evaluate for TermSet {
    fn eval(&self, state: &State) -> bool {
        self.terms.iter().any(|t| t.eval(state))
    }
}

impl fmt::Display for TermSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in &self.terms {
            writeln!(f, "{}", t)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn parsing_and_deduplication() -> Result<(), MinkitError> {
        let single: TermSet = "--01-1".parse()?;
        assert_eq!(single.len(), 1);

        let terms: TermSet = "0-10; 0-11 | 1-11\n0-10".parse()?;
        assert_eq!(terms.len(), 3);

        let mut terms = terms;
        assert!(!terms.insert("0-11".parse()?));
        assert!(terms.insert("1111".parse()?));
        assert_eq!(terms.len(), 4);
        Ok(())
    }

    #[test]
    fn insertion_order_is_preserved() -> Result<(), MinkitError> {
        let terms: TermSet = "11; 0-; 10".parse()?;
        let rendered: Vec<String> = terms.iter().map(Term::to_string).collect();
        assert_eq!(rendered, vec!["11", "0-", "10"]);
        Ok(())
    }

    #[test]
    fn disjunction() -> Result<(), MinkitError> {
        let terms: TermSet = "0-1; 11-".parse()?;
        assert!(terms.eval(&"001".parse()?));
        assert!(terms.eval(&"110".parse()?));
        assert!(!terms.eval(&"100".parse()?));

        assert!(!TermSet::default().eval(&"000".parse()?));
        Ok(())
    }
}
