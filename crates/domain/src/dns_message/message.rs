use super::{Header, Question, ResourceRecord};

/// A decoded DNS message. Section lengths match the header counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl Message {
    /// First address record in the answer section.
    pub fn first_answer_address(&self) -> Option<&str> {
        self.answers.iter().find_map(ResourceRecord::address)
    }

    /// First address record in the additional section (glue).
    pub fn first_glue_address(&self) -> Option<&str> {
        self.additionals.iter().find_map(ResourceRecord::address)
    }

    /// First nameserver record in the authority section. A nameserver
    /// named by the root label is no referral.
    pub fn first_referral_name(&self) -> Option<&str> {
        self.authorities
            .iter()
            .find_map(ResourceRecord::nameserver)
            .filter(|name| !name.is_empty())
    }
}
