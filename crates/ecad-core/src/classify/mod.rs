pub mod engine;
pub mod outcome;

pub use engine::Classifier;
pub use outcome::LayoutTag;
