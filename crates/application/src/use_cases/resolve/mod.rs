mod recursive_lookup;
mod referral;
mod resolve_domain;

pub use recursive_lookup::RecursiveLookupUseCase;
pub use referral::ReferralStep;
pub use resolve_domain::{ResolveDomainUseCase, DEFAULT_MAX_REFERRAL_DEPTH, DEFAULT_ROOT_SERVER};
