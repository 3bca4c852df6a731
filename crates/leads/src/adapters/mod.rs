//! `LeadSource` adapters

mod json_file;
mod memory;

pub use json_file::JsonFileLeadSource;
pub use memory::InMemoryLeadSource;

use revenueos_core::PipelineRecord;

/// Order newest-first and keep at most `limit` records
fn newest_first(mut records: Vec<PipelineRecord>, limit: usize) -> Vec<PipelineRecord> {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    records.truncate(limit);
    records
}
