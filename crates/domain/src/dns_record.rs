mod record_type;

pub use record_type::RecordType;

/// Internet class, the only class this resolver queries.
pub const CLASS_IN: u16 = 1;
