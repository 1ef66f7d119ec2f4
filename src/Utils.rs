/// tables and JSON export
pub mod report;
