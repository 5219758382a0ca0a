pub mod category_counter;
pub mod event_store;

pub use category_counter::CategoryCounter;
pub use event_store::{EventStore, OTHER_CATEGORY};
