//! Token locked-value table

use crate::config::ChainInfo;
use serde::Serialize;

/// Base units per whole token
const UNIT: f64 = 1e18;

/// One row of the locked-value table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TvlRow {
    pub symbol: String,
    pub chain: String,
    pub price: f64,
    pub locked: f64,
}

/// Locked-value rows for a chain's tracked tokens.
///
/// One row per token entry, in entry order; `locked` is the total locked
/// amount (base units) valued at the unit price.
pub fn tvl_rows(chain: &ChainInfo) -> Vec<TvlRow> {
    chain
        .tokens
        .iter()
        .map(|token| TvlRow {
            symbol: token.symbol.clone(),
            chain: chain.display_name.clone(),
            price: token.price,
            locked: token.total * token.price / UNIT,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locked_value_math() {
        let chain = ChainInfo::new("ethereum", 1)
            .with_display_name("Ethereum Mainnet")
            .with_token("WETH", 2500.0, 12.5e18);

        let rows = tvl_rows(&chain);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].symbol, "WETH");
        assert_eq!(rows[0].chain, "Ethereum Mainnet");
        assert_eq!(rows[0].price, 2500.0);
        assert!((rows[0].locked - 31_250.0).abs() < 1e-9);
    }

    #[test]
    fn test_rows_preserve_entry_order() {
        let chain = ChainInfo::new("polygon", 137)
            .with_token("USDC", 1.0, 3.0e18)
            .with_token("WMATIC", 0.5, 10.0e18)
            .with_token("DAI", 1.0, 7.0e18);

        let symbols: Vec<_> = tvl_rows(&chain).into_iter().map(|r| r.symbol).collect();
        assert_eq!(symbols, vec!["USDC", "WMATIC", "DAI"]);
    }

    #[test]
    fn test_no_tokens_no_rows() {
        let chain = ChainInfo::new("base", 8453);
        assert!(tvl_rows(&chain).is_empty());
    }

    #[test]
    fn test_zero_price_zero_locked() {
        let chain = ChainInfo::new("bsc", 56).with_token("DUST", 0.0, 5.0e18);
        assert_eq!(tvl_rows(&chain)[0].locked, 0.0);
    }
}
