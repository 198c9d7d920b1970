pub mod csv;
pub mod excel;
pub mod snapshot;

// Re-export commonly used functions
pub use self::csv::{read_csv, write_csv};
pub use self::excel::{read_excel, write_excel};
pub use self::snapshot::{read_snapshot, write_snapshot};
