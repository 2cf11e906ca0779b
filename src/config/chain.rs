//! Chain metadata configuration

use serde::{Deserialize, Serialize};

/// Metadata for a single chain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainInfo {
    /// Short name used for lookup (lowercase slug)
    pub name: String,
    /// Human-readable name
    #[serde(default)]
    pub display_name: String,
    /// Numeric chain id
    pub id: u64,
    /// Public RPC endpoints, in display order
    #[serde(default)]
    pub public_rpcs: Vec<String>,
    /// Block explorer URL
    #[serde(default)]
    pub explorer: Option<String>,
    /// Tokens tracked for the locked-value table
    #[serde(default)]
    pub tokens: Vec<TokenEntry>,
}

/// One token tracked on a chain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenEntry {
    /// Token symbol
    pub symbol: String,
    /// Unit price in the quote currency
    pub price: f64,
    /// Total locked amount in base units (1e18 per whole token)
    pub total: f64,
}

impl ChainInfo {
    /// Create a new chain with no endpoints or tokens
    pub fn new(name: impl Into<String>, id: u64) -> Self {
        let name = name.into();
        Self {
            display_name: name.clone(),
            name,
            id,
            public_rpcs: Vec::new(),
            explorer: None,
            tokens: Vec::new(),
        }
    }

    /// Builder-style setter for display_name
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Builder-style setter for explorer
    pub fn with_explorer(mut self, explorer: impl Into<String>) -> Self {
        self.explorer = Some(explorer.into());
        self
    }

    /// Append an RPC endpoint
    pub fn with_rpc(mut self, url: impl Into<String>) -> Self {
        self.public_rpcs.push(url.into());
        self
    }

    /// Append a tracked token
    pub fn with_token(mut self, symbol: impl Into<String>, price: f64, total: f64) -> Self {
        self.tokens.push(TokenEntry {
            symbol: symbol.into(),
            price,
            total,
        });
        self
    }

    /// True if `query` matches this chain's slug (case-insensitive) or id
    pub fn matches(&self, query: &str) -> bool {
        if self.name.eq_ignore_ascii_case(query) {
            return true;
        }
        query.parse::<u64>().map(|id| id == self.id).unwrap_or(false)
    }
}
