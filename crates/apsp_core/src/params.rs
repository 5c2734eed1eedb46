#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Workers {
    Single,
    Auto,
    Multi(usize),
}

impl Workers {
    pub fn number_of_workers(&self) -> usize {
        match self {
            Workers::Single => 1,
            Workers::Multi(num) => *num,
            Workers::Auto => std::thread::available_parallelism().map_or(1, |n| n.get()),
        }
    }

    /// Worker count for a graph of `nodes` nodes. `Auto` never asks for more
    /// workers than there are nodes; explicit counts are passed through and
    /// validated by the layout.
    pub fn for_nodes(&self, nodes: usize) -> usize {
        match self {
            Workers::Auto => self.number_of_workers().min(nodes).max(1),
            _ => self.number_of_workers(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Termination {
    /// Iterate until a round changes nothing.
    #[default]
    Converged,
    /// Stop after at most this many rounds, converged or not.
    MaxRounds(usize),
}

impl Termination {
    pub fn round_limit_reached(&self, rounds: usize) -> bool {
        match self {
            Termination::Converged => false,
            Termination::MaxRounds(max) => rounds >= *max,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ApspParams {
    pub workers: Workers,
    pub termination: Termination,
}

impl Default for ApspParams {
    fn default() -> Self {
        Self {
            workers: Workers::Auto,
            termination: Termination::Converged,
        }
    }
}

impl ApspParams {
    pub fn with_workers(workers: usize) -> Self {
        Self {
            workers: Workers::Multi(workers),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_workers_clamped_to_nodes() {
        assert_eq!(Workers::Auto.for_nodes(1), 1);
        assert!(Workers::Auto.for_nodes(1000) >= 1);
        assert_eq!(Workers::Multi(8).for_nodes(3), 8);
        assert_eq!(Workers::Single.for_nodes(3), 1);
    }

    #[test]
    fn test_round_limit() {
        assert!(!Termination::Converged.round_limit_reached(usize::MAX));
        assert!(!Termination::MaxRounds(2).round_limit_reached(1));
        assert!(Termination::MaxRounds(2).round_limit_reached(2));
        assert!(Termination::MaxRounds(0).round_limit_reached(0));
    }
}
