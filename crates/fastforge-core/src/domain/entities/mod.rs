pub mod common;
pub mod project_file;
pub mod project_schema;
pub mod project_structure;
pub mod support_file;
pub mod test_stub;
