//! Built-in chain registry
//!
//! Public RPC endpoints for well-known networks, in display order. The
//! config file can override a built-in chain (matched by name) or add new
//! ones; token entries for the locked-value table come from the config.

use crate::config::{ChainInfo, ConfigFile};
use crate::error::{Error, Result};

/// Chain lookup table, built-in entries plus config overrides
#[derive(Debug, Clone)]
pub struct Registry {
    chains: Vec<ChainInfo>,
}

impl Registry {
    /// Registry with only the built-in chains
    pub fn builtin() -> Self {
        Self {
            chains: vec![
                ethereum(),
                polygon(),
                arbitrum(),
                optimism(),
                base(),
                bsc(),
                avalanche(),
            ],
        }
    }

    /// Built-in chains merged with config chains.
    ///
    /// A config chain with the same name replaces the built-in entry in
    /// place; unknown names are appended in config order. A chain with no
    /// display name falls back to its slug.
    pub fn with_config(config: &ConfigFile) -> Self {
        let mut registry = Self::builtin();
        for chain in &config.chains {
            let mut chain = chain.clone();
            if chain.display_name.is_empty() {
                chain.display_name = chain.name.clone();
            }
            match registry
                .chains
                .iter_mut()
                .find(|c| c.name.eq_ignore_ascii_case(&chain.name))
            {
                Some(existing) => *existing = chain,
                None => registry.chains.push(chain),
            }
        }
        registry
    }

    /// All chains in display order
    pub fn all(&self) -> &[ChainInfo] {
        &self.chains
    }

    /// Look up a chain by slug (case-insensitive) or numeric id
    pub fn find(&self, query: &str) -> Result<&ChainInfo> {
        self.chains
            .iter()
            .find(|c| c.matches(query))
            .ok_or_else(|| Error::UnknownChain(query.to_string()))
    }
}

/// Ethereum mainnet
fn ethereum() -> ChainInfo {
    ChainInfo::new("ethereum", 1)
        .with_display_name("Ethereum Mainnet")
        .with_explorer("https://etherscan.io")
        .with_rpc("https://eth-mainnet.public.blastapi.io")
        .with_rpc("https://ethereum.publicnode.com")
        .with_rpc("https://rpc.flashbots.net")
        .with_rpc("https://eth.drpc.org")
        .with_rpc("https://rpc.mevblocker.io")
        .with_rpc("https://eth.api.onfinality.io/public")
}

/// Polygon PoS mainnet
fn polygon() -> ChainInfo {
    ChainInfo::new("polygon", 137)
        .with_display_name("Polygon")
        .with_explorer("https://polygonscan.com")
        .with_rpc("https://polygon-rpc.com")
        .with_rpc("https://polygon-mainnet.public.blastapi.io")
        .with_rpc("https://polygon.publicnode.com")
        .with_rpc("https://polygon.drpc.org")
        .with_rpc("https://polygon.api.onfinality.io/public")
}

/// Arbitrum One
fn arbitrum() -> ChainInfo {
    ChainInfo::new("arbitrum", 42161)
        .with_display_name("Arbitrum One")
        .with_explorer("https://arbiscan.io")
        .with_rpc("https://arb1.arbitrum.io/rpc")
        .with_rpc("https://arbitrum-mainnet.public.blastapi.io")
        .with_rpc("https://arbitrum.publicnode.com")
        .with_rpc("https://arbitrum.drpc.org")
}

/// OP Mainnet
fn optimism() -> ChainInfo {
    ChainInfo::new("optimism", 10)
        .with_display_name("OP Mainnet")
        .with_explorer("https://optimistic.etherscan.io")
        .with_rpc("https://mainnet.optimism.io")
        .with_rpc("https://optimism-mainnet.public.blastapi.io")
        .with_rpc("https://optimism.publicnode.com")
        .with_rpc("https://optimism.drpc.org")
}

/// Base
fn base() -> ChainInfo {
    ChainInfo::new("base", 8453)
        .with_display_name("Base")
        .with_explorer("https://basescan.org")
        .with_rpc("https://mainnet.base.org")
        .with_rpc("https://base-mainnet.public.blastapi.io")
        .with_rpc("https://base.publicnode.com")
        .with_rpc("https://base.drpc.org")
}

/// BNB Smart Chain
fn bsc() -> ChainInfo {
    ChainInfo::new("bsc", 56)
        .with_display_name("BNB Smart Chain")
        .with_explorer("https://bscscan.com")
        .with_rpc("https://bsc-dataseed.binance.org")
        .with_rpc("https://bsc-mainnet.public.blastapi.io")
        .with_rpc("https://bsc.publicnode.com")
        .with_rpc("https://bsc.drpc.org")
}

/// Avalanche C-Chain
fn avalanche() -> ChainInfo {
    ChainInfo::new("avalanche", 43114)
        .with_display_name("Avalanche C-Chain")
        .with_explorer("https://snowtrace.io")
        .with_rpc("https://api.avax.network/ext/bc/C/rpc")
        .with_rpc("https://avalanche-mainnet.public.blastapi.io/ext/bc/C/rpc")
        .with_rpc("https://avalanche-c-chain.publicnode.com")
        .with_rpc("https://avalanche.drpc.org")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_chains_have_endpoints() {
        let registry = Registry::builtin();
        assert_eq!(registry.all().len(), 7);
        for chain in registry.all() {
            assert!(!chain.public_rpcs.is_empty(), "{} has no RPCs", chain.name);
            assert!(!chain.display_name.is_empty());
        }
    }

    #[test]
    fn test_builtin_ids_unique() {
        let registry = Registry::builtin();
        for (i, a) in registry.all().iter().enumerate() {
            for b in &registry.all()[i + 1..] {
                assert_ne!(a.id, b.id);
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_find_by_slug_and_id() {
        let registry = Registry::builtin();

        assert_eq!(registry.find("ethereum").unwrap().id, 1);
        assert_eq!(registry.find("Ethereum").unwrap().id, 1);
        assert_eq!(registry.find("137").unwrap().name, "polygon");
        assert_eq!(registry.find("8453").unwrap().name, "base");
    }

    #[test]
    fn test_find_unknown_chain() {
        let registry = Registry::builtin();
        match registry.find("notachain") {
            Err(Error::UnknownChain(name)) => assert_eq!(name, "notachain"),
            other => panic!("expected UnknownChain, got {:?}", other.map(|c| &c.name)),
        }
    }

    #[test]
    fn test_config_override_replaces_builtin() {
        let mut config = ConfigFile::default();
        config
            .chains
            .push(ChainInfo::new("ethereum", 1).with_rpc("http://127.0.0.1:8545"));

        let registry = Registry::with_config(&config);
        assert_eq!(registry.all().len(), 7);
        let eth = registry.find("ethereum").unwrap();
        assert_eq!(eth.public_rpcs, vec!["http://127.0.0.1:8545".to_string()]);
    }

    #[test]
    fn test_config_appends_new_chain() {
        let mut config = ConfigFile::default();
        config
            .chains
            .push(ChainInfo::new("localnet", 31337).with_rpc("http://127.0.0.1:8545"));

        let registry = Registry::with_config(&config);
        assert_eq!(registry.all().len(), 8);
        assert_eq!(registry.find("31337").unwrap().name, "localnet");
    }

    #[test]
    fn test_config_display_name_falls_back_to_slug() {
        let mut chain = ChainInfo::new("localnet", 31337);
        chain.display_name = String::new();

        let mut config = ConfigFile::default();
        config.chains.push(chain);

        let registry = Registry::with_config(&config);
        assert_eq!(registry.find("localnet").unwrap().display_name, "localnet");
    }
}
