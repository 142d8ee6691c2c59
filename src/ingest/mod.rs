pub mod row;
pub mod reader;
pub mod events;

pub use row::Row;
pub use reader::load_rows;
pub use events::{extract_events, EVENT_OFFSET};
