use crate::*;

const DEFAULT_OUTPUT: &str = "Y";

/// The frozen result of a full minimization run.
///
/// Running the pipeline classifies the table, generates the prime
/// implicants from the union of minterms and don't-care terms, builds the
/// covering table against the minterms alone, and selects the essential
/// implicants as the final term set. Every stage runs eagerly: a failure
/// anywhere produces no result at all.
///
/// Each intermediate artifact stays accessible afterwards, and the three
/// renderable artifacts (expression, netlist, verification table) are
/// derived on demand from the frozen final set, so repeated renderings are
/// reproducible down to the byte.
///
/// ```
/// use minkit::{Output, Row, TruthTable};
/// # use minkit::MinkitError;
/// # fn main() -> Result<(), MinkitError> {
///
/// let rows = vec![
///     Row::new([("A", false), ("B", false)], Output::False),
///     Row::new([("A", false), ("B", true)], Output::True),
///     Row::new([("A", true), ("B", false)], Output::True),
///     Row::new([("A", true), ("B", true)], Output::True),
/// ];
/// let min = TruthTable::from_rows(rows)?.minimize()?;
///
/// assert_eq!(min.expression().to_string(), "B + A");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Minimization {
    order: VarOrder,
    minterms: TermSet,
    dontcares: TermSet,
    primes: Primes,
    cover: CoverTable,
    essentials: TermSet,
    output: String,
}

impl TruthTable {
    /// Run the full minimization pipeline on this table.
    pub fn minimize(&self) -> Result<Minimization, MinkitError> {
        Minimization::of(self)
    }
}

impl Minimization {
    /// Minimize a classified truth table.
    pub fn of(table: &TruthTable) -> Result<Self, MinkitError> {
        let mut pool = table.minterms().clone();
        pool.extend(table.dontcares().iter().cloned());

        let primes = Primes::from_terms(&pool);
        let cover = CoverTable::build(&primes, table.minterms())?;
        let essentials = cover.essentials();

        Ok(Self {
            order: table.order().clone(),
            minterms: table.minterms().clone(),
            dontcares: table.dontcares().clone(),
            primes,
            cover,
            essentials,
            output: DEFAULT_OUTPUT.into(),
        })
    }

    /// Use another name for the synthesized output signal
    pub fn with_output_name(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    /// The variable ordering of the run
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

    /// All prime implicants, in generation order
    pub fn primes(&self) -> &Primes {
        &self.primes
    }

    /// The covering table used to select the essential implicants
    pub fn cover(&self) -> &CoverTable {
        &self.cover
    }

    /// The essential prime implicants: the final minimized term set
    pub fn essentials(&self) -> &TermSet {
        &self.essentials
    }

    /// The name of the synthesized output signal
    pub fn output_name(&self) -> &str {
        &self.output
    }

    /// Render the final term set as a sum-of-products expression
    pub fn expression(&self) -> Sop<'_> {
        Sop::new(&self.essentials, &self.order)
    }

    /// Synthesize the final term set as an AND-OR gate netlist
    pub fn netlist(&self) -> Netlist {
        Netlist::build(&self.essentials, &self.order, &self.output)
    }

    /// Simulate the final term set on every input assignment
    pub fn verify(&self) -> VerificationTable {
        VerificationTable::build(&self.essentials, &self.order, &self.output)
    }
}
