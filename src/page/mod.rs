//! Page entities: front-matter metadata and index records.

mod meta;
mod record;

pub use meta::PageMeta;
pub use record::PageRecord;
