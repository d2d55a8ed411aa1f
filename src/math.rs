mod admissible;

pub use admissible::{admissible_factors, factors_by_finish, factors_by_start};
