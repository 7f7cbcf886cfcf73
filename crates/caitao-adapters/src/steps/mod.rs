//! Steps del pipeline: acquire → classify → filter → aggregate → export.
pub mod acquire;
pub mod aggregate;
pub mod classify;
pub mod export;
pub mod filter;

pub use acquire::AcquireRecordsStep;
pub use aggregate::AggregateStep;
pub use classify::ClassifyRecordsStep;
pub use export::ExportDocumentStep;
pub use filter::FilterWorkingSetStep;
