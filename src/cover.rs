use crate::*;

/// The covering table: each required minterm with its covering implicants.
///
/// Rows follow the minterm order; the coverers of a row follow the prime
/// implicant order. Don't-care terms take no part here: they may have
/// helped the implicants grow, but nothing has to cover them.
///
/// The table is the read-only basis for essentiality: a minterm with a
/// single coverer makes that implicant [essential](CoverTable::essentials).
#[derive(Clone, Debug, Default)]
pub struct CoverTable {
    rows: Vec<(Term, TermSet)>,
}

impl CoverTable {
    /// Map every minterm to the prime implicants covering it.
    ///
    /// A minterm covered by nothing means the implicants were generated
    /// from a term set that did not include it; the table refuses to
    /// exist rather than under-constrain the selection.
    pub fn build(primes: &Primes, minterms: &TermSet) -> Result<Self, MinkitError> {
        let mut rows = Vec::with_capacity(minterms.len());
        for minterm in minterms {
            let mut coverers = TermSet::default();
            for prime in primes {
                if prime.covers(minterm) {
                    coverers.insert(prime.clone());
                }
            }
            if coverers.is_empty() {
                return Err(MinkitError::UncoveredMinterm(minterm.to_string()));
            }
            rows.push((minterm.clone(), coverers));
        }
        Ok(Self { rows })
    }

    /// Collect the implicants that are the sole coverer of some minterm.
    ///
    /// The result keeps the row order and is deduplicated; it is the final
    /// minimized term set. Implicants covering their minterms only
    /// redundantly are dropped, even when that leaves some minterms to the
    /// dropped ones: no secondary cover selection happens here.
    pub fn essentials(&self) -> TermSet {
        let mut essentials = TermSet::default();
        for (_, coverers) in &self.rows {
            let mut iter = coverers.iter();
            if let (Some(sole), None) = (iter.next(), iter.next()) {
                essentials.insert(sole.clone());
            }
        }
        essentials
    }

    /// Iterate over the rows: each minterm with its ordered coverers
    pub fn iter(&self) -> impl Iterator<Item = (&Term, &TermSet)> {
        self.rows.iter().map(|(m, c)| (m, c))
    }

    /// Get the number of rows (one per required minterm)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Return whether the table has no row
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn sole_coverers_are_essential() -> Result<(), MinkitError> {
        // 00 is covered by 0- alone, 11 by -1 alone, 01 by both
        let minterms: TermSet = "00; 01; 11".parse()?;
        let primes = Primes::from_terms(&minterms);
        assert_eq!(primes.as_terms(), &"0-; -1".parse()?);

        let cover = CoverTable::build(&primes, &minterms)?;
        let covered: Vec<(String, usize)> = cover
            .iter()
            .map(|(m, c)| (m.to_string(), c.len()))
            .collect();
        assert_eq!(
            covered,
            vec![
                ("00".to_string(), 1),
                ("01".to_string(), 2),
                ("11".to_string(), 1)
            ]
        );

        assert_eq!(cover.essentials(), "0-; -1".parse()?);
        Ok(())
    }

    #[test]
    fn sole_coverer_of_every_row() -> Result<(), MinkitError> {
        // the full cube collapses to one implicant covering every minterm
        let minterms: TermSet = "00; 01; 11; 10".parse()?;
        let primes = Primes::from_terms(&minterms);
        assert_eq!(primes.len(), 1);

        let cover = CoverTable::build(&primes, &minterms)?;
        assert_eq!(cover.essentials(), "--".parse()?);
        Ok(())
    }

    #[test]
    fn cyclic_cover_has_no_essential() -> Result<(), MinkitError> {
        // every minterm has two coverers, so none of the six implicants
        // is forced and the selection comes back empty
        let minterms: TermSet = "000; 001; 010; 101; 110; 111".parse()?;
        let primes = Primes::from_terms(&minterms);
        assert_eq!(primes.len(), 6);

        let cover = CoverTable::build(&primes, &minterms)?;
        assert!(cover.iter().all(|(_, coverers)| coverers.len() == 2));
        assert!(cover.essentials().is_empty());
        Ok(())
    }

    #[test]
    fn uncovered_minterm_is_fatal() -> Result<(), MinkitError> {
        let primes = Primes::from_terms(&"00".parse()?);
        let minterms: TermSet = "00; 11".parse()?;
        assert!(matches!(
            CoverTable::build(&primes, &minterms),
            Err(MinkitError::UncoveredMinterm(m)) if m == "11"
        ));
        Ok(())
    }

    #[test]
    fn no_minterm_no_row() -> Result<(), MinkitError> {
        let cover = CoverTable::build(&Primes::default(), &TermSet::default())?;
        assert!(cover.is_empty());
        assert!(cover.essentials().is_empty());
        Ok(())
    }
}
