//! Decoder for the binary tables stored inside Open Plan BK3 files.
//!
//! Each table is its own stream in the BK3 compound document:
//! - Bytes 0-3: magic number 550 (little-endian int32)
//! - Column count, then one pstring per column name
//! - Row count, then one pstring per cell, row by row
//!
//! A pstring is a length byte followed by that many Latin-1 bytes. A length
//! of 0 means the cell has no value; 255 means a little-endian int16 length
//! follows. Cell text is converted using the global column dictionary in
//! [`schema`].

pub mod convert;
pub mod error;
pub mod guid;
pub mod reader;
pub mod schema;
pub mod table;

pub use error::{Result, TableError};
pub use schema::DataType;
pub use table::{read_table, ReaderOptions, Table, TableReader};

/// Magic number opening every table stream
pub const MAGIC: i32 = 550;
