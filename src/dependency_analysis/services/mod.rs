mod dependency_analyzer;
mod graph_builder;
mod group_filter;
mod lock_parser;
mod manifest_reader;
mod output_assembler;
mod relationship_classifier;

pub use dependency_analyzer::{AnalysisStats, DependencyAnalyzer};
pub use graph_builder::GraphBuilder;
pub use group_filter::GroupFilter;
pub use lock_parser::LockRecordParser;
pub use manifest_reader::ManifestReader;
pub use output_assembler::OutputAssembler;
pub use relationship_classifier::RelationshipClassifier;
