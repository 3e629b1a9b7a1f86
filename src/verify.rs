//! Exhaustive verification of a synthesized term set.

use crate::*;

/// The truth table implemented by a term set, by exhaustive simulation.
///
/// Every one of the 2^N input assignments is enumerated in lexicographic
/// order, with the first variable of the ordering as the most significant
/// bit, and evaluated against the rule. The result is the ordered list of
/// (assignment, value) pairs, to be checked against the truth table the
/// function came from.
///
/// This is a pure function of the rule and the ordering: building the
/// table twice yields identical rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationTable {
    order: VarOrder,
    output: String,
    rows: Vec<(State, bool)>,
}

impl VerificationTable {
    /// Simulate the rule on every assignment of the ordering.
    pub fn build(rule: &impl Evaluate, order: &VarOrder, output: &str) -> Self {
        let width = order.len();
        let mut rows = Vec::with_capacity(1 << width);
        for code in 0..(1_usize << width) {
            let mut state = State::default();
            for (pos, var) in order.variables().enumerate() {
                if code & (1 << (width - 1 - pos)) != 0 {
                    state.activate(var);
                }
            }
            let value = rule.eval(&state);
            rows.push((state, value));
        }
        Self {
            order: order.clone(),
            output: output.into(),
            rows,
        }
    }

    /// Iterate over the (assignment, value) pairs, in enumeration order
    pub fn rows(&self) -> impl Iterator<Item = (&State, bool)> {
        self.rows.iter().map(|(state, value)| (state, *value))
    }

    /// Get the number of simulated assignments (always 2^N)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Return whether there is no row
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for VerificationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (state, value) in &self.rows {
            let mut first = true;
            for (var, name) in self.order.iter() {
                match first {
                    true => first = false,
                    false => write!(f, " ")?,
                }
                write!(f, "{}={}", name, state.is_active(var) as u8)?;
            }
            writeln!(f, " => {}={}", self.output, *value as u8)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn enumeration_order_and_values() -> Result<(), MinkitError> {
        let order = VarOrder::from_names(["A", "B"])?;
        let terms: TermSet = "1-".parse()?;
        let table = VerificationTable::build(&terms, &order, "Y");

        assert_eq!(table.len(), 4);
        let values: Vec<bool> = table.rows().map(|(_, value)| value).collect();
        // 00, 01, 10, 11 with A as the most significant bit
        assert_eq!(values, vec![false, false, true, true]);
        Ok(())
    }

    #[test]
    fn rendering() -> Result<(), MinkitError> {
        let order = VarOrder::from_names(["A", "B"])?;
        let terms: TermSet = "01".parse()?;
        let table = VerificationTable::build(&terms, &order, "Y");

        assert_eq!(
            table.to_string(),
            "A=0 B=0 => Y=0\nA=0 B=1 => Y=1\nA=1 B=0 => Y=0\nA=1 B=1 => Y=0\n"
        );
        Ok(())
    }

    #[test]
    fn empty_rule_is_always_false() -> Result<(), MinkitError> {
        let order = VarOrder::from_names(["A", "B", "C"])?;
        let table = VerificationTable::build(&TermSet::default(), &order, "Y");
        assert_eq!(table.len(), 8);
        assert!(table.rows().all(|(_, value)| !value));
        Ok(())
    }
}
