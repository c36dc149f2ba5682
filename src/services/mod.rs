pub mod curriculum_writer;
pub mod link_classifier;
pub mod row_extractor;

pub use curriculum_writer::CurriculumWriter;
pub use link_classifier::{ClassifiedLinks, LinkClass, LinkClassifier};
pub use row_extractor::RowExtractor;
