mod header;
mod message;
mod question;
mod record;

pub use header::{Header, FLAG_RECURSION_DESIRED, HEADER_LEN};
pub use message::Message;
pub use question::Question;
pub use record::{RecordData, ResourceRecord};
