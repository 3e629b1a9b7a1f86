use thiserror::Error;

/// Failures reported by the minimization pipeline.
///
/// All errors are fatal: the run that raised one produces no partial result,
/// and re-running on the same input reproduces the same error.
#[derive(Error, Debug)]
pub enum MinkitError {
    /// The name is not a valid identifier
    #[error("The name '{0}' is invalid")]
    InvalidName(String),

    /// The same name was given twice for one ordering
    #[error("The name '{0}' appears twice in the variable ordering")]
    DuplicateName(String),

    /// The name is not part of the variable ordering
    #[error("There is no variable named '{0}'")]
    NoSuchName(String),

    /// The output field of a row is not one of 1, 0, x
    #[error("'{0}' is not a valid output value")]
    InvalidOutput(String),

    /// The truth table has no rows at all
    #[error("The truth table has no rows")]
    EmptyTable,

    /// A row uses a different variable set than the first row
    #[error("Row {0} does not match the variable ordering")]
    InconsistentRow(usize),

    /// The term string contains a symbol outside 0, 1, -
    #[error("Not a valid term: '{0}'")]
    InvalidTerm(String),

    /// The state string contains a symbol outside 0, 1
    #[error("Not a valid state: '{0}'")]
    InvalidState(String),

    /// A required minterm is covered by no prime implicant
    #[error("Minterm '{0}' is not covered by any prime implicant")]
    UncoveredMinterm(String),
}
