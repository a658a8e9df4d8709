//! Plan inputs: the parameter set a projection is run against

mod data;
mod validate;
pub mod loader;

pub use data::{ProjectionInput, ContributionFrequency, AccountType};
pub use validate::InputError;
pub use loader::{load_input, load_input_from_reader, save_input};
