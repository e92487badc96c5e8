use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// First nameserver asked; a.root-servers.net by default
    #[serde(default = "default_root_server")]
    pub root_server: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Per send/receive timeout in milliseconds
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Bound on referrals per chain and on nested nameserver lookups
    #[serde(default = "default_max_referral_depth")]
    pub max_referral_depth: u8,

    #[serde(default = "default_receive_buffer_size")]
    pub receive_buffer_size: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_server: default_root_server(),
            port: default_port(),
            query_timeout_ms: default_query_timeout_ms(),
            max_referral_depth: default_max_referral_depth(),
            receive_buffer_size: default_receive_buffer_size(),
        }
    }
}

fn default_root_server() -> String {
    "198.41.0.4".to_string()
}

fn default_port() -> u16 {
    53
}

fn default_query_timeout_ms() -> u64 {
    5000
}

fn default_max_referral_depth() -> u8 {
    30
}

fn default_receive_buffer_size() -> usize {
    1024
}
