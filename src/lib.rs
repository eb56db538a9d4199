pub mod model;
pub mod openplan;

pub use model::{Duration, ResourceClass, Row, TimeUnit, Value};
pub use openplan::{read_table, DataType, ReaderOptions, Table, TableError, TableReader};
