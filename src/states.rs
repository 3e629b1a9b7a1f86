use crate::*;

use std::str::FromStr;

/// A full input assignment: the set of active variables, all others inactive.
///
/// States can be constructed explicitly by activating individual variables,
/// collected from an iterator of variables, or parsed from a positional
/// string where the character at each position gives the value of the
/// variable with that UID.
///
/// ```
/// use minkit::{State, Variable};
///
/// let state: State = "0110".parse().unwrap();
/// assert!(!state.is_active(Variable::from(0)));
/// assert!( state.is_active(Variable::from(1)));
/// ```
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct State {
    pub(crate) active: VarSet,
}

impl State {
    /// Activate the given variable in this state
    pub fn activate(&mut self, var: Variable) {
        self.active.insert(var);
    }

    /// Disable the given variable in this state
    pub fn disable(&mut self, var: Variable) {
        self.active.remove(var);
    }

    /// Test if a specific variable is active in this state
    pub fn is_active(&self, var: Variable) -> bool {
        self.active.contains(var)
    }

    /// Return the set of active variables
    pub fn active(&self) -> &VarSet {
        &self.active
    }
}

impl From<VarSet> for State {
    fn from(active: VarSet) -> Self {
        Self { active }
    }
}

impl FromIterator<Variable> for State {
    fn from_iter<I: IntoIterator<Item = Variable>>(iter: I) -> Self {
        Self::from(VarSet::from_iter(iter))
    }
}

impl FromStr for State {
    type Err = MinkitError;

    fn from_str(descr: &str) -> Result<State, MinkitError> {
        let mut state = State::default();
        let mut idx = 0;
        for c in descr.chars() {
            match c {
                ' ' | '\t' => (), // skip spacing used for readability
                '0' => idx += 1,
                '1' => {
                    state.activate(Variable(idx));
                    idx += 1;
                }
                _ => return Err(MinkitError::InvalidState(descr.into())),
            };
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn construct_and_parse() -> Result<(), MinkitError> {
        let mut state = State::default();
        state.activate(Variable::from(1));
        state.activate(Variable::from(2));
        state.disable(Variable::from(2));

        assert!(state.is_active(Variable::from(1)));
        assert!(!state.is_active(Variable::from(2)));

        let parsed: State = "01 00".parse()?;
        assert_eq!(parsed, state);

        assert!("01-0".parse::<State>().is_err());
        Ok(())
    }
}
