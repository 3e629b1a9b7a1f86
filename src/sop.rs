//! Sum-of-products rendering of a term set.

use crate::*;

/// Display adapter rendering a term set as a sum-of-products expression.
///
/// Each term contributes its literals in variable order: the plain name
/// for a `1` position, the name with a complement mark for a `0` position,
/// nothing for a wildcard. Literals are concatenated (the AND is implicit)
/// and terms are joined with ` + `.
///
/// A term with no literal at all is a tautology and renders as `1`; an
/// empty term set is the constant false function and renders as `0`, so
/// neither degenerate case produces an empty string.
///
/// ```
/// use minkit::{Sop, TermSet, VarOrder};
/// # use minkit::MinkitError;
/// # fn main() -> Result<(), MinkitError> {
///
/// let order = VarOrder::from_names(["A", "B", "C"])?;
/// let terms: TermSet = "0-1; 11-".parse()?;
/// assert_eq!(Sop::new(&terms, &order).to_string(), "A'C + AB");
/// # Ok(())
/// # }
/// ```
pub struct Sop<'a> {
    terms: &'a TermSet,
    order: &'a VarOrder,
}

impl<'a> Sop<'a> {
    /// Render the given terms with the names of the given ordering
    pub fn new(terms: &'a TermSet, order: &'a VarOrder) -> Self {
        Self { terms, order }
    }
}

impl fmt::Display for Sop<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        let mut first = true;
        for term in self.terms {
            match first {
                true => first = false,
                false => write!(f, " + ")?,
            }
            if term.literals() == 0 {
                write!(f, "1")?;
                continue;
            }
            for (var, value) in term.iter_fixed() {
                self.order.format_variable(f, var)?;
                if !value {
                    write!(f, "'")?;
                }
            }
        }
        Ok(())
    }
}
