pub mod submission;

pub use submission::{normalize_name, Submission, ValidSubmission};
