mod deal_status;
mod pipeline_record;

pub use deal_status::DealStatus;
pub use pipeline_record::PipelineRecord;
