//! Batch normalization of India tourism and cultural-funding statistics
//! tables, plus the aggregate views the reporting dashboard reads.
//!
//! Two stages with no feedback loop between them: [`normalize`] turns each
//! raw CSV under the raw directory into a cleaned CSV under the processed
//! directory, and [`query`] computes grouped summaries over the cleaned
//! files on demand. Every query call re-reads its source files; nothing is
//! cached between calls.

pub mod normalize;
pub mod query;
pub mod table;
pub mod util;
