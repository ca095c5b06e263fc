//! The default asset-class universe for the portfolio builder.
//!
//! Order is significant: index `i` here aligns with index `i` in every
//! statistics vector and matrix, whichever provider produced them. The
//! static assumptions table in `hobart-data` lists the same five asset
//! classes in the same order.

/// An asset class: a display label plus the ticker of the proxy ETF used
/// for price history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetClass {
    /// Display label.
    pub label: &'static str,
    /// Ticker symbol of the proxy ETF.
    pub symbol: &'static str,
}

impl AssetClass {
    /// Create a new asset class.
    pub const fn new(label: &'static str, symbol: &'static str) -> Self {
        Self { label, symbol }
    }
}

/// The fixed, ordered asset-class universe.
#[derive(Debug, Clone)]
pub struct AssetUniverse {
    assets: Vec<AssetClass>,
}

impl AssetUniverse {
    /// The default five-asset-class universe with its proxy ETFs.
    pub fn new() -> Self {
        Self {
            assets: vec![
                AssetClass::new("U.S. Bonds", "BND"),
                AssetClass::new("Global Bonds", "BNDX"),
                AssetClass::new("U.S. Stocks", "VTI"),
                AssetClass::new("Global Stocks", "VT"),
                AssetClass::new("Emerging Market Stocks", "VWO"),
            ],
        }
    }

    /// All asset classes, in universe order.
    pub fn assets(&self) -> &[AssetClass] {
        &self.assets
    }

    /// Display labels, in universe order.
    pub fn labels(&self) -> Vec<String> {
        self.assets.iter().map(|a| a.label.to_string()).collect()
    }

    /// Proxy-ETF symbols, in universe order.
    pub fn symbols(&self) -> Vec<String> {
        self.assets.iter().map(|a| a.symbol.to_string()).collect()
    }

    /// Number of asset classes.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether the universe is empty.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl Default for AssetUniverse {
    fn default() -> Self {
        Self::new()
    }
}
