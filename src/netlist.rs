//! Two-level AND-OR gate synthesis.

use crate::*;

use itertools::Itertools;

/// The right-hand side of a gate assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Gate {
    /// A constant signal
    Const(bool),
    /// A single literal passed through, without a one-input AND gate
    Wire(String),
    /// AND over the rendered input literals
    And(Vec<String>),
    /// OR over the intermediate product signals
    Or(Vec<String>),
}

/// One gate-assignment statement: a target signal and its driving gate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assign {
    target: String,
    gate: Gate,
}

impl Assign {
    /// The signal driven by this statement
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The gate driving the signal
    pub fn gate(&self) -> &Gate {
        &self.gate
    }
}

/// A gate-level netlist equivalent to a term set.
///
/// Each term yields one product statement on an intermediate wire, named
/// `w0`, `w1`, ... after the position of the term in the set, so that the
/// same term set always synthesizes the same statements in the same order.
/// A single final statement ORs every wire into the output signal.
///
/// Negated inputs appear as `NOT(name)` in the gate inputs. A term with a
/// single literal drives its wire directly, skipping the degenerate
/// one-input AND; a term with no literal drives the constant `1`; an empty
/// term set drives the output with the constant `0`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Netlist {
    assigns: Vec<Assign>,
}

impl Netlist {
    /// Synthesize the gate statements for a term set.
    pub fn build(terms: &TermSet, order: &VarOrder, output: &str) -> Self {
        let mut assigns = Vec::with_capacity(terms.len() + 1);
        let mut wires = Vec::with_capacity(terms.len());
        for (idx, term) in terms.iter().enumerate() {
            let wire = format!("w{}", idx);
            let mut literals: Vec<String> = term
                .iter_fixed()
                .map(|(var, value)| {
                    let name = match order.name(var) {
                        Some(name) => name.to_string(),
                        None => var.to_string(),
                    };
                    match value {
                        true => name,
                        false => format!("NOT({})", name),
                    }
                })
                .collect();
            let gate = match literals.len() {
                0 => Gate::Const(true),
                1 => Gate::Wire(literals.remove(0)),
                _ => Gate::And(literals),
            };
            assigns.push(Assign {
                target: wire.clone(),
                gate,
            });
            wires.push(wire);
        }
        let gate = match wires.is_empty() {
            true => Gate::Const(false),
            false => Gate::Or(wires),
        };
        assigns.push(Assign {
            target: output.into(),
            gate,
        });
        Self { assigns }
    }

    /// The statements, in emission order (products first, the OR last)
    pub fn assigns(&self) -> &[Assign] {
        &self.assigns
    }

    /// Get the number of statements
    pub fn len(&self) -> usize {
        self.assigns.len()
    }

    /// Return whether there is no statement
    pub fn is_empty(&self) -> bool {
        self.assigns.is_empty()
    }
}

impl fmt::Display for Assign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = ", self.target)?;
        match &self.gate {
            Gate::Const(false) => write!(f, "0"),
            Gate::Const(true) => write!(f, "1"),
            Gate::Wire(input) => write!(f, "{}", input),
            Gate::And(inputs) => write!(f, "AND({})", inputs.iter().join(", ")),
            Gate::Or(inputs) => write!(f, "OR({})", inputs.iter().join(", ")),
        }
    }
}

impl fmt::Display for Netlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for assign in &self.assigns {
            writeln!(f, "{}", assign)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn products_and_final_or() -> Result<(), MinkitError> {
        let order = VarOrder::from_names(["A", "B", "C"])?;
        let terms: TermSet = "0-1; 11-".parse()?;
        let netlist = Netlist::build(&terms, &order, "Y");

        assert_eq!(
            netlist.to_string(),
            "w0 = AND(NOT(A), C)\nw1 = AND(A, B)\nY = OR(w0, w1)\n"
        );
        Ok(())
    }

    #[test]
    fn single_literal_is_passed_through() -> Result<(), MinkitError> {
        let order = VarOrder::from_names(["A", "B"])?;
        let terms: TermSet = "-0; 1-".parse()?;
        let netlist = Netlist::build(&terms, &order, "Y");

        assert_eq!(
            netlist.to_string(),
            "w0 = NOT(B)\nw1 = A\nY = OR(w0, w1)\n"
        );
        assert_eq!(netlist.assigns()[0].gate(), &Gate::Wire("NOT(B)".into()));
        Ok(())
    }

    #[test]
    fn degenerate_netlists() -> Result<(), MinkitError> {
        let order = VarOrder::from_names(["A"])?;

        let netlist = Netlist::build(&TermSet::default(), &order, "Y");
        assert_eq!(netlist.to_string(), "Y = 0\n");

        let tautology: TermSet = "-".parse()?;
        let netlist = Netlist::build(&tautology, &order, "OUT");
        assert_eq!(netlist.to_string(), "w0 = 1\nOUT = OR(w0)\n");
        Ok(())
    }
}
