//! Reusable reactive hooks.

mod column_resize;

pub use column_resize::{ColumnResize, use_column_resize};
