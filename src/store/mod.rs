pub mod roster_store;

pub use roster_store::{RosterError, RosterStore};
