//! Classification domain: model results, captions and the session history.

pub mod contract;
pub mod description;
pub mod history;
pub mod result;

pub use contract::{ClassifyImageInput, ClassifyImageOutput, GenerateImageDescriptionOutput};
pub use description::ImageDescription;
pub use history::HistoryEntry;
pub use result::{ClassificationResult, ResultError};
