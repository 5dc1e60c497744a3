pub mod calculations;
pub mod models;
pub mod store;

pub use calculations::{
    FiscalScenario, NetToGrossError, NetToGrossResult, NetToGrossSolver, OptimalSplitError,
    OptimalSplitInput, OptimalSplitSearch, OptimizationResult, ScenarioCalculator, ScenarioInput,
};
pub use models::*;
pub use store::repository::{CrmRepository, RepositoryError};
