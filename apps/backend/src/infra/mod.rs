pub mod db;
pub mod db_errors;
pub mod state;

pub use db::{bootstrap_db, connect_db};
pub use state::{build_state, StateBuilder};
