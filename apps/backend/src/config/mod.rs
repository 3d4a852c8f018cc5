pub mod db;
pub mod server;

pub use db::{db_url, DbProfile, PoolSettings};
pub use server::ServerConfig;
