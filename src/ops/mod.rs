pub mod query;
pub mod ribbon;
pub mod stats;
pub mod task_ops;
pub mod urgency;
