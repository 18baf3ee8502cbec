//! Link kinds a traceability lookup can start from.

use serde::Deserialize;

/// Entity kind addressed by `/traceability/{kind}/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TraceLink {
    #[serde(rename = "productinfo")]
    ProductionInfo,
    #[serde(rename = "product")]
    Product,
    #[serde(rename = "logistics")]
    Logistics,
    #[serde(rename = "saleinfo")]
    SaleInfo,
}

/// Entity label used for every not-found outcome of a trace lookup.
pub const TRACE_ENTITY: &str = "Trace record";

impl TraceLink {
    pub const ALL: [TraceLink; 4] = [
        TraceLink::ProductionInfo,
        TraceLink::Product,
        TraceLink::Logistics,
        TraceLink::SaleInfo,
    ];

    /// Path segment for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ProductionInfo => "productinfo",
            Self::Product => "product",
            Self::Logistics => "logistics",
            Self::SaleInfo => "saleinfo",
        }
    }
}

impl std::fmt::Display for TraceLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
