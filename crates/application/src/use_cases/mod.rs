pub mod resolve;

pub use resolve::{
    RecursiveLookupUseCase, ReferralStep, ResolveDomainUseCase, DEFAULT_MAX_REFERRAL_DEPTH,
    DEFAULT_ROOT_SERVER,
};
