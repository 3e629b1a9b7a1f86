//! Truth tables and the classification of their rows into terms.

use crate::*;

use std::str::FromStr;

/// Output value of a truth-table row.
///
/// A row is either required to be true (a minterm), required to be false,
/// or left unspecified (a don't-care, free to take whichever value gives
/// the smaller expression).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Output {
    /// The function must be true on this row
    True,
    /// The function must be false on this row
    False,
    /// The row does not constrain the function
    DontCare,
}

impl FromStr for Output {
    type Err = MinkitError;

    /// Accept exactly the textual markers `1`, `0`, `x` and `X`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Output::True),
            "0" => Ok(Output::False),
            "x" | "X" => Ok(Output::DontCare),
            _ => Err(MinkitError::InvalidOutput(s.into())),
        }
    }
}

/// A single truth-table row: one value per variable, plus the output.
#[derive(Clone, Debug)]
pub struct Row {
    values: HashMap<String, bool>,
    output: Output,
}

impl Row {
    /// Create a row from its input values and output
    pub fn new<I, S>(values: I, output: Output) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            output,
        }
    }

    /// Get the output value of this row
    pub fn output(&self) -> Output {
        self.output
    }

    /// Get the value of a named input, if the row carries it
    pub fn value(&self, name: &str) -> Option<bool> {
        self.values.get(name).copied()
    }
}

/// A validated truth table, with its rows classified into terms.
///
/// Constructing the table freezes the [variable ordering](VarOrder)
/// (derived from the first row's variable names, sorted) and routes every
/// row by its output value: required rows become minterms, unconstrained
/// rows become don't-care terms, false rows are discarded. Both resulting
/// term lists are deduplicated and keep their row order.
///
/// A function with no minterm is a valid degenerate table (the constant
/// false function), not an error.
#[derive(Clone, Debug)]
pub struct TruthTable {
    order: VarOrder,
    minterms: TermSet,
    dontcares: TermSet,
}

impl TruthTable {
    /// Validate a list of rows and classify them.
    ///
    /// Fails on an empty row list, on any row whose variable name set
    /// differs from the first row's, and on invalid variable names. The
    /// offending row index is reported; nothing is classified past the
    /// first failure.
    pub fn from_rows<I: IntoIterator<Item = Row>>(rows: I) -> Result<Self, MinkitError> {
        let rows: Vec<Row> = rows.into_iter().collect();
        let first = rows.first().ok_or(MinkitError::EmptyTable)?;
        let order = VarOrder::from_names(first.values.keys())?;

        let mut minterms = TermSet::default();
        let mut dontcares = TermSet::default();
        for (idx, row) in rows.iter().enumerate() {
            if row.values.len() != order.len() {
                return Err(MinkitError::InconsistentRow(idx));
            }
            let mut state = State::default();
            for (var, name) in order.iter() {
                match row.value(name) {
                    None => return Err(MinkitError::InconsistentRow(idx)),
                    Some(true) => state.activate(var),
                    Some(false) => (),
                }
            }
            let term = Term::from_state(&state, order.len());
            match row.output {
                Output::True => {
                    minterms.insert(term);
                }
                Output::DontCare => {
                    dontcares.insert(term);
                }
                Output::False => (),
            }
        }

        Ok(Self {
            order,
            minterms,
            dontcares,
        })
    }

    /// The frozen variable ordering of this table
    pub fn order(&self) -> &VarOrder {
        &self.order
    }

    /// The terms on which the function must be true
    pub fn minterms(&self) -> &TermSet {
        &self.minterms
    }

    /// The terms on which the function is unconstrained
    pub fn dontcares(&self) -> &TermSet {
        &self.dontcares
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    fn two_input_rows() -> Vec<Row> {
        vec![
            Row::new([("A", false), ("B", false)], Output::False),
            Row::new([("A", false), ("B", true)], Output::True),
            Row::new([("A", true), ("B", false)], Output::True),
            Row::new([("A", true), ("B", true)], Output::True),
        ]
    }

    #[test]
    fn output_markers() {
        assert_eq!("1".parse::<Output>().unwrap(), Output::True);
        assert_eq!("0".parse::<Output>().unwrap(), Output::False);
        assert_eq!("x".parse::<Output>().unwrap(), Output::DontCare);
        assert_eq!("X".parse::<Output>().unwrap(), Output::DontCare);
        assert!("2".parse::<Output>().is_err());
        assert!("true".parse::<Output>().is_err());
    }

    #[test]
    fn classification() -> Result<(), MinkitError> {
        let table = TruthTable::from_rows(two_input_rows())?;
        assert_eq!(format!("{}", table.order()), "A, B");
        assert_eq!(table.minterms(), &"01; 10; 11".parse()?);
        assert!(table.dontcares().is_empty());
        Ok(())
    }

    #[test]
    fn dontcare_routing() -> Result<(), MinkitError> {
        let rows = vec![
            Row::new([("A", false)], Output::DontCare),
            Row::new([("A", true)], Output::False),
        ];
        let table = TruthTable::from_rows(rows)?;
        assert!(table.minterms().is_empty());
        assert_eq!(table.dontcares(), &"0".parse()?);
        Ok(())
    }

    #[test]
    fn rejects_empty_table() {
        assert!(matches!(
            TruthTable::from_rows([]),
            Err(MinkitError::EmptyTable)
        ));
    }

    #[test]
    fn rejects_inconsistent_rows() {
        let rows = vec![
            Row::new([("A", false), ("B", false)], Output::True),
            Row::new([("A", true), ("C", false)], Output::True),
        ];
        assert!(matches!(
            TruthTable::from_rows(rows),
            Err(MinkitError::InconsistentRow(1))
        ));

        let rows = vec![
            Row::new([("A", false), ("B", false)], Output::True),
            Row::new([("A", true)], Output::True),
        ];
        assert!(matches!(
            TruthTable::from_rows(rows),
            Err(MinkitError::InconsistentRow(1))
        ));
    }
}
