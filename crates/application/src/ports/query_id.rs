/// Source of DNS transaction IDs.
pub trait QueryIdSource: Send + Sync {
    fn next_id(&self) -> u16;
}
