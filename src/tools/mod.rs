mod path_validator;
mod sequence_scanner;

pub use path_validator::validate_directory_exists;
pub use sequence_scanner::{SequenceFileInfo, scan_sequence_files};
