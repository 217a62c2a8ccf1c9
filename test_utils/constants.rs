use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files"));

/// Header row of the inbound message CSV fixtures.
pub const INBOUND_CSV_HEADER_ROW: &str = "Group Id,User Id,Display Name,Is Group,Timestamp,Text";
