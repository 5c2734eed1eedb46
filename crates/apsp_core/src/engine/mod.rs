pub mod convergence;
pub mod optimizer;
pub mod worker;
