use serde::{Deserialize, Serialize};

/// engine-wide calculation settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// daily iof accrual stops at this many days per installment
    pub iof_day_cap: i64,
    /// schedule passes used to settle the financed amount with iof included
    pub iof_refinement_passes: u32,
    /// rate solver settings shared by eir and tec
    pub solver: SolverConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            iof_day_cap: 365,
            iof_refinement_passes: 7,
            solver: SolverConfig::default(),
        }
    }
}

/// bracketing root solver settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// convergence threshold on successive annual-rate estimates
    pub tolerance: f64,
    /// iteration budget before reporting failure
    pub max_iterations: u32,
    /// lower bracket bound for the annual rate
    pub bracket_low: f64,
    /// upper bracket bound, widened once when no sign change is found
    pub bracket_high: f64,
    /// starting estimate
    pub initial_guess: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-12,
            max_iterations: 200,
            bracket_low: -0.999_999,
            bracket_high: 10.0,
            initial_guess: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.iof_day_cap, 365);
        assert_eq!(config.iof_refinement_passes, 7);
        assert_eq!(config.solver.max_iterations, 200);
    }
}
