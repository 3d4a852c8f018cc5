pub mod error_shape;
pub mod healthcheck;
pub mod ranking_get;
pub mod ranking_submit;
