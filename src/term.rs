use crate::*;

use std::str::FromStr;

/// A product term over a fixed-width variable ordering.
///
/// Each position of a term carries one of the symbols `0`, `1` or `-`:
/// the variable at a `1` position must be active, the variable at a `0`
/// position must be inactive, and a `-` position is a wildcard (the term
/// does not depend on that variable). A term with no wildcard denotes a
/// single input assignment; a term with k wildcards denotes 2^k of them.
///
/// Internally the fixed positions are stored as two disjoint [VarSet]s,
/// so the merge and cover predicates are bitwise operations. The width is
/// explicit: all terms taking part in one minimization run share it.
///
/// Terms can be parsed from positional strings, in which the width is the
/// number of symbols. Spaces inside the string are ignored.
///
/// ```
/// use minkit::Term;
/// # use minkit::MinkitError;
/// # fn main() -> Result<(), MinkitError> {
///
/// let term: Term = "11-0".parse()?;
/// assert_eq!(term.width(), 4);
/// assert_eq!(term.wildcards(), 1);
/// assert_eq!(term.to_string(), "11-0");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Term {
    width: usize,
    positive: VarSet,
    negative: VarSet,
}

/// Evaluation of a Boolean rule on a full input assignment.
///
/// Terms evaluate as products of their literals; collections of terms
/// evaluate as the disjunction over their members. The verifier
/// ([VerificationTable](crate::VerificationTable)) accepts anything
/// implementing this trait.
pub trait Evaluate {
    /// Evaluate on the given state
    fn eval(&self, state: &State) -> bool;
}

impl Term {
    /// Create the fully specified term matching exactly one state.
    ///
    /// Every variable of the ordering is fixed: active variables give `1`
    /// positions, all others give `0` positions.
    pub fn from_state(state: &State, width: usize) -> Self {
        let mut positive = VarSet::default();
        let mut negative = VarSet::default();
        for var in (0..width).map(Variable::from) {
            match state.is_active(var) {
                true => positive.insert(var),
                false => negative.insert(var),
            }
        }
        Self {
            width,
            positive,
            negative,
        }
    }

    /// Get the number of positions in this term
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the number of fixed positions in this term
    pub fn literals(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    /// Get the number of wildcard positions in this term
    pub fn wildcards(&self) -> usize {
        self.width - self.literals()
    }

    /// Return whether this term has no wildcard position
    pub fn is_fully_specified(&self) -> bool {
        self.wildcards() == 0
    }

    /// Get the value of a fixed position, or None for a wildcard
    pub fn value(&self, var: Variable) -> Option<bool> {
        if self.positive.contains(var) {
            Some(true)
        } else if self.negative.contains(var) {
            Some(false)
        } else {
            None
        }
    }

    /// Iterate over the fixed positions and their values, in order
    pub fn iter_fixed(&self) -> impl Iterator<Item = (Variable, bool)> + '_ {
        (0..self.width)
            .map(Variable::from)
            .filter_map(move |v| self.value(v).map(|b| (v, b)))
    }

    /// The set of fixed positions (the complement of the wildcards)
    pub fn support(&self) -> VarSet {
        let mut support = self.positive.clone();
        support.union_with(&self.negative);
        support
    }

    /// Combine with another term differing in exactly one fixed position.
    ///
    /// Two terms merge iff they have the same width, the same wildcard
    /// positions, and opposite values in exactly one position. The merged
    /// term frees that position and keeps everything else.
    ///
    /// The wildcard alignment is checked explicitly: a wildcard facing a
    /// fixed position disqualifies the pair even when all other positions
    /// agree.
    ///
    /// ```
    /// use minkit::Term;
    /// # use minkit::MinkitError;
    /// # fn main() -> Result<(), MinkitError> {
    ///
    /// let a: Term = "1100".parse()?;
    /// let b: Term = "1110".parse()?;
    /// assert_eq!(a.merge(&b), Some("11-0".parse()?));
    /// # Ok(())
    /// # }
    /// ```
    pub fn merge(&self, other: &Self) -> Option<Self> {
        if self.width != other.width || self.support() != other.support() {
            return None;
        }
        let mut flips = self.positive.symmetric_difference(&other.positive);
        let flipped = flips.next()?;
        if flips.next().is_some() {
            return None;
        }
        let mut merged = self.clone();
        merged.positive.remove(flipped);
        merged.negative.remove(flipped);
        Some(merged)
    }

    /// Test if the given fully specified term is covered by this term.
    ///
    /// This is equivalent to membership in the set of all assignments
    /// obtained by substituting values into the wildcard positions, without
    /// enumerating them: all `1` positions of this term must be `1` in the
    /// minterm and no `0` position may be.
    pub fn covers(&self, minterm: &Term) -> bool {
        minterm.is_fully_specified()
            && self.width == minterm.width
            && minterm.positive.contains_all(&self.positive)
            && minterm.positive.is_disjoint(&self.negative)
    }
}

impl Evaluate for Term {
    fn eval(&self, state: &State) -> bool {
        state.active.contains_all(&self.positive) && state.active.is_disjoint(&self.negative)
    }
}

impl FromStr for Term {
    type Err = MinkitError;

    fn from_str(descr: &str) -> Result<Term, MinkitError> {
        let mut term = Term {
            width: 0,
            positive: VarSet::default(),
            negative: VarSet::default(),
        };
        for c in descr.chars() {
            match c {
                ' ' | '\t' => (), // skip spacing used for readability
                '-' => term.width += 1,
                '0' => {
                    term.negative.insert(Variable(term.width));
                    term.width += 1;
                }
                '1' => {
                    term.positive.insert(Variable(term.width));
                    term.width += 1;
                }
                _ => return Err(MinkitError::InvalidTerm(descr.into())),
            };
        }
        Ok(term)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for var in (0..self.width).map(Variable::from) {
            let symbol = match self.value(var) {
                Some(true) => '1',
                Some(false) => '0',
                None => '-',
            };
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn parse_and_display() -> Result<(), MinkitError> {
        let term: Term = "0-10 1".parse()?;
        assert_eq!(term.width(), 5);
        assert_eq!(term.literals(), 4);
        assert_eq!(term.wildcards(), 1);
        assert_eq!(term.to_string(), "0-101");

        assert!(!term.is_fully_specified());
        assert!("0110".parse::<Term>()?.is_fully_specified());

        assert!("01x0".parse::<Term>().is_err());
        Ok(())
    }

    #[test]
    fn merge_single_difference() -> Result<(), MinkitError> {
        let a: Term = "1100".parse()?;
        let b: Term = "1110".parse()?;
        assert_eq!(a.merge(&b), Some("11-0".parse()?));
        assert_eq!(b.merge(&a), Some("11-0".parse()?));
        Ok(())
    }

    #[test]
    fn merge_rejects_distant_pairs() -> Result<(), MinkitError> {
        // two differing positions
        let a: Term = "1100".parse()?;
        let b: Term = "0110".parse()?;
        assert_eq!(a.merge(&b), None);

        // identical terms have no position to free
        assert_eq!(a.merge(&a.clone()), None);

        // widths must match
        assert_eq!(a.merge(&"110".parse()?), None);
        Ok(())
    }

    #[test]
    fn merge_rejects_misaligned_wildcards() -> Result<(), MinkitError> {
        // single differing character, but it faces a wildcard
        let a: Term = "1-0".parse()?;
        let b: Term = "110".parse()?;
        assert_eq!(a.merge(&b), None);

        // same literal count, shifted wildcard
        let a: Term = "11-0".parse()?;
        let b: Term = "1-10".parse()?;
        assert_eq!(a.merge(&b), None);
        Ok(())
    }

    #[test]
    fn cover_is_expansion_membership() -> Result<(), MinkitError> {
        let implicant: Term = "1-0-".parse()?;

        // the four expansions of the two wildcards
        for covered in ["1000", "1001", "1100", "1101"] {
            assert!(implicant.covers(&covered.parse()?));
        }
        for missed in ["0000", "1010", "1111", "0101"] {
            assert!(!implicant.covers(&missed.parse()?));
        }

        // only fully specified terms can be covered
        assert!(!implicant.covers(&"1-00".parse()?));
        Ok(())
    }

    #[test]
    fn evaluation() -> Result<(), MinkitError> {
        let term: Term = "1-0".parse()?;
        assert!(term.eval(&"100".parse()?));
        assert!(term.eval(&"110".parse()?));
        assert!(!term.eval(&"101".parse()?));
        assert!(!term.eval(&"000".parse()?));
        Ok(())
    }

    #[test]
    fn from_state_fixes_every_position() -> Result<(), MinkitError> {
        let state: State = "010".parse()?;
        let term = Term::from_state(&state, 3);
        assert_eq!(term, "010".parse()?);
        assert!(term.is_fully_specified());
        Ok(())
    }
}
