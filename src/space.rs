use crate::*;

use once_cell::sync::Lazy;
use regex::Regex;

static RE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap());

/// The ordered collection of named variables defining the input space.
///
/// The ordering is constructed once, from the full set of names, and is
/// immutable afterwards: names are validated, sorted lexicographically and
/// frozen. Every downstream component receives the ordering as an explicit
/// parameter and uses it consistently to position symbols in terms, so the
/// same name set always yields the same bit layout.
///
/// ```
/// use minkit::{Variable, VarOrder};
/// # use minkit::MinkitError;
/// # fn main() -> Result<(), MinkitError> {
///
/// // Names are sorted at construction, whatever order they arrive in
/// let order = VarOrder::from_names(["sel", "clk", "rst"])?;
///
/// assert_eq!(order.name(Variable::from(0)), Some("clk"));
/// assert_eq!(order.get("sel"), Some(Variable::from(2)));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct VarOrder {
    names: Vec<String>,
}

impl VarOrder {
    /// Build the ordering from a collection of names.
    ///
    /// Each name must be a valid identifier and must appear only once.
    /// The names are sorted lexicographically; the position of a name in
    /// the sorted list is the UID of its [Variable].
    pub fn from_names<I>(names: I) -> Result<Self, MinkitError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        for name in &names {
            if !RE_NAME.is_match(name) {
                return Err(MinkitError::InvalidName(name.clone()));
            }
        }
        names.sort();
        for pair in names.windows(2) {
            if pair[0] == pair[1] {
                return Err(MinkitError::DuplicateName(pair[0].clone()));
            }
        }
        Ok(Self { names })
    }

    /// Get the number of variables in the ordering
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Return whether the ordering contains no variable
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over all variables, in order
    pub fn variables(&self) -> impl Iterator<Item = Variable> {
        (0..self.names.len()).map(Variable::from)
    }

    /// Iterate over all variables and their names, in order
    pub fn iter(&self) -> impl Iterator<Item = (Variable, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(uid, name)| (Variable(uid), name.as_str()))
    }

    /// Get the name associated to a variable of this ordering
    pub fn name(&self, var: Variable) -> Option<&str> {
        self.names.get(var.uid()).map(String::as_str)
    }

    /// Search the variable carrying the given name
    pub fn get(&self, name: &str) -> Option<Variable> {
        // the sorted name list doubles as the lookup index
        self.names
            .binary_search_by(|n| n.as_str().cmp(name))
            .ok()
            .map(Variable::from)
    }

    /// Search the variable carrying the given name, or fail
    pub fn get_or_err(&self, name: &str) -> Result<Variable, MinkitError> {
        self.get(name).ok_or_else(|| MinkitError::NoSuchName(name.into()))
    }

    /// Insert the name of a variable during a display operation.
    ///
    /// Variables outside of the ordering fall back to their generic
    /// UID-based name.
    pub fn format_variable(&self, f: &mut fmt::Formatter, var: Variable) -> fmt::Result {
        match self.names.get(var.uid()) {
            None => write!(f, "{}", var),
            Some(name) => write!(f, "{}", name),
        }
    }
}

impl fmt::Display for VarOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for name in &self.names {
            match first {
                true => first = false,
                false => write!(f, ", ")?,
            }
            write!(f, "{}", name)?;
        }
        Ok(())
    }
}
