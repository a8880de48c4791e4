pub mod collection;

pub use collection::{RowCollection, RowError, RowEvent, RowObserver};
