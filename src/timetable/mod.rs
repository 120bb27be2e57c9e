pub mod format;
pub mod table;

pub use format::{DateFormat, Layout, TableFormat};
pub use table::{TableError, TimeTable};
