use crate::*;

use delegate::delegate;
use itertools::Itertools;
use std::slice::Iter;
use std::vec::IntoIter;

/// The set of prime implicants of a term set.
///
/// An implicant is prime when it cannot be [merged](Term::merge) with any
/// other surviving implicant into a larger one. This wrapper is only
/// produced by the generator, so its content is maximal and deduplicated
/// by construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Primes {
    terms: TermSet,
}

impl Primes {
    /// Generate all prime implicants of the given terms.
    ///
    /// Repeatedly merges every pair of terms of the current generation
    /// that differ in exactly one fixed position. A term taking part in at
    /// least one merge is consumed (it was not maximal); a term surviving a
    /// whole round unmerged is prime. The deduplicated merge results form
    /// the next generation, until a round produces no merge at all.
    ///
    /// Terms enabling merges but not required in the final cover (the
    /// don't-care terms) take part here like any other: inclusion is
    /// decided later, by the covering table.
    ///
    /// Running the generator on its own output is a fixed point: prime
    /// implicants of the same round were already tested against each other
    /// and terms of different rounds never share their wildcard positions.
    pub fn from_terms(terms: &TermSet) -> Self {
        let mut primes = TermSet::default();
        let mut generation = terms.clone();
        loop {
            let mut consumed = vec![false; generation.len()];
            let mut next = TermSet::default();
            for ((i, a), (j, b)) in generation.iter().enumerate().tuple_combinations() {
                if let Some(merged) = a.merge(b) {
                    consumed[i] = true;
                    consumed[j] = true;
                    next.insert(merged);
                }
            }
            for (i, term) in generation.iter().enumerate() {
                if !consumed[i] {
                    primes.insert(term.clone());
                }
            }
            if next.is_empty() {
                break;
            }
            generation = next;
        }
        Self { terms: primes }
    }

    /// Access the underlying term set
    pub fn as_terms(&self) -> &TermSet {
        &self.terms
    }

    /// Extract the underlying term set
    pub fn into_terms(self) -> TermSet {
        self.terms
    }

    /// Iterate over the prime implicants, in generation order
    pub fn iter(&self) -> Iter<'_, Term> {
        self.terms.iter()
    }

    delegate! {
        to self.terms {
            /// Get the number of prime implicants
            pub fn len(&self) -> usize;
            /// Return whether there is no prime implicant
            pub fn is_empty(&self) -> bool;
            /// Test if the exact term is one of the prime implicants
            pub fn contains(&self, term: &Term) -> bool;
        }
    }
}

impl From<&TermSet> for Primes {
    fn from(terms: &TermSet) -> Self {
        Self::from_terms(terms)
    }
}

impl Evaluate for Primes {
    delegate! {
        to self.terms {
            fn eval(&self, state: &State) -> bool;
        }
    }
}

impl<'a> IntoIterator for &'a Primes {
    type Item = &'a Term;
    type IntoIter = Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl IntoIterator for Primes {
    type Item = Term;
    type IntoIter = IntoIter<Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

// delegate Display to the term set
impl fmt::Display for Primes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.terms.fmt(f)
    }
}
