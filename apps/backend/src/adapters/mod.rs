pub mod ranking_sea;
