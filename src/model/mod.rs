//! Typed values produced by the table decoder.
//!
//! These are independent of the on-disk token format; mapping rows into
//! activities, resources or calendars happens elsewhere.

pub mod duration;
pub mod resource;
pub mod row;
pub mod value;

pub use duration::{Duration, TimeUnit};
pub use resource::ResourceClass;
pub use row::Row;
pub use value::Value;
