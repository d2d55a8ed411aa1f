mod common;
mod half_turn;
mod orchestrator;
mod quarter_turn;
mod translation;
mod type_one_half_turn_reflection;
mod type_one_reflection;
mod type_two_half_turn_reflection;
mod type_two_reflection;

pub use orchestrator::anyfactorization;
