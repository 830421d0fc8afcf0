//! Library surface of the `veracity` CLI, kept separate from the binary so
//! the analyze glue is testable.
pub mod analyze;
