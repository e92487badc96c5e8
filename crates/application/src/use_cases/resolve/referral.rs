use rootwalk_domain::Message;

/// What a nameserver response tells the resolver to do next.
///
/// Precedence is answer, then glue, then delegation; only the first
/// matching record of each section is consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferralStep {
    /// An address record in the answer section.
    Answer(String),
    /// An address record in the additional section; ask that IP next.
    Glue(String),
    /// A nameserver name in the authority section with no glue; it must be
    /// resolved before it can be asked.
    Delegation(String),
    /// Nothing to act on.
    DeadEnd,
}

impl ReferralStep {
    pub fn from_message(message: &Message) -> Self {
        if let Some(ip) = message.first_answer_address() {
            ReferralStep::Answer(ip.to_string())
        } else if let Some(ip) = message.first_glue_address() {
            ReferralStep::Glue(ip.to_string())
        } else if let Some(name) = message.first_referral_name() {
            ReferralStep::Delegation(name.to_string())
        } else {
            ReferralStep::DeadEnd
        }
    }
}
