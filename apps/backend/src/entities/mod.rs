pub mod ranking;

pub use ranking::Entity as Ranking;
pub use ranking::Model as RankingRow;
