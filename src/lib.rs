pub mod cell;
pub mod inspect;
pub mod logging;
pub mod table;

pub use inspect::{DEFAULT_FILE_PATH, load_table, report, run};
pub use table::Table;
