//! Ordered fallback lookups for premium response fields.
//!
//! The premium backend is versioned off the wire: the same concept has lived
//! under `delta`, `Delta`, `greeks.net.delta`, `portfolioGreeks.net.Delta`
//! and more. Each concept gets a [`FieldChain`], a named, ordered list of
//! [`Accessor`]s tried first to last. The first accessor that finds a
//! non-null value wins; an exhausted chain yields `None`.

use crate::domain::entities::premium_result::PremiumResult;
use serde_json::Value;

/// One strategy for locating a concept: a JSON object key path.
#[derive(Debug, Clone, Copy)]
pub struct Accessor {
    pub name: &'static str,
    pub path: &'static [&'static str],
}

impl Accessor {
    pub const fn new(name: &'static str, path: &'static [&'static str]) -> Self {
        Self { name, path }
    }

    pub fn read<'a>(&self, result: &'a PremiumResult) -> Option<&'a Value> {
        result.at(self.path)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldChain {
    pub concept: &'static str,
    pub accessors: &'static [Accessor],
}

/// Value found by a chain, tagged with the accessor that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<'a> {
    pub accessor: &'static str,
    pub value: &'a Value,
}

impl FieldChain {
    pub fn resolve<'a>(&self, result: &'a PremiumResult) -> Option<Resolved<'a>> {
        self.accessors.iter().find_map(|a| {
            a.read(result).map(|value| Resolved {
                accessor: a.name,
                value,
            })
        })
    }
}

macro_rules! greek_chain {
    ($concept:literal, $upper:literal, $lower:literal) => {
        FieldChain {
            concept: $concept,
            accessors: &[
                Accessor::new("portfolio_net_upper", &["portfolioGreeks", "net", $upper]),
                Accessor::new("portfolio_net_lower", &["portfolioGreeks", "net", $lower]),
                Accessor::new("greeks_net_upper", &["greeks", "net", $upper]),
                Accessor::new("greeks_net_lower", &["greeks", "net", $lower]),
                Accessor::new("greeks_upper", &["greeks", $upper]),
                Accessor::new("greeks_lower", &["greeks", $lower]),
                Accessor::new("premium_greeks_upper", &["premium", "greeks", $upper]),
                Accessor::new("premium_greeks_lower", &["premium", "greeks", $lower]),
                Accessor::new("root_upper", &[$upper]),
                Accessor::new("root_lower", &[$lower]),
            ],
        }
    };
}

pub const DELTA: FieldChain = greek_chain!("delta", "Delta", "delta");
pub const GAMMA: FieldChain = greek_chain!("gamma", "Gamma", "gamma");
pub const THETA: FieldChain = greek_chain!("theta", "Theta", "theta");
pub const VEGA: FieldChain = greek_chain!("vega", "Vega", "vega");
pub const RHO: FieldChain = greek_chain!("rho", "Rho", "rho");

pub const SCORE: FieldChain = FieldChain {
    concept: "anchorlock_score",
    accessors: &[
        Accessor::new("signals_score", &["signals", "score"]),
        Accessor::new("anchorlock_score", &["anchorlock", "score"]),
        Accessor::new("premium_signals_score", &["premium", "signals", "score"]),
        Accessor::new("premium_anchorlock_score", &["premium", "anchorlock", "score"]),
    ],
};

pub const SIGNAL: FieldChain = FieldChain {
    concept: "signal",
    accessors: &[
        Accessor::new("root_signal", &["signal"]),
        Accessor::new("signals_action", &["signals", "action"]),
        Accessor::new("premium_signals_action", &["premium", "signals", "action"]),
        Accessor::new("anchorlock_signal", &["anchorlock", "signal"]),
    ],
};

pub const IV_PUT: FieldChain = FieldChain {
    concept: "iv_put",
    accessors: &[
        Accessor::new("root_iv_put", &["iv_put"]),
        Accessor::new("iv_put", &["iv", "put"]),
    ],
};

pub const IV_CALL: FieldChain = FieldChain {
    concept: "iv_call",
    accessors: &[
        Accessor::new("root_iv_call", &["iv_call"]),
        Accessor::new("iv_call", &["iv", "call"]),
    ],
};

macro_rules! component_chain {
    ($key:literal) => {
        FieldChain {
            concept: $key,
            accessors: &[
                Accessor::new("components", &["components", $key]),
                Accessor::new("anchorlock_components", &["anchorlock", "components", $key]),
            ],
        }
    };
}

/// Display label and chain for each AnchorLock component, in table order.
pub const COMPONENTS: [(&str, FieldChain); 7] = [
    ("RSI", component_chain!("RSI")),
    ("RSI Score", component_chain!("RSIScore")),
    ("Momentum 30d", component_chain!("Momentum30d")),
    ("200-DMA", component_chain!("DMA200")),
    ("Gap to 200-DMA", component_chain!("GapTo200DMA")),
    ("200-DMA 30d slope", component_chain!("DMA200Slope30d")),
    ("Earnings Score", component_chain!("EarningsScore")),
];

macro_rules! assumption_chain {
    ($key:literal) => {
        FieldChain {
            concept: $key,
            accessors: &[Accessor::new("assumptions", &["assumptions", $key])],
        }
    };
}

pub const ASSUMPTION_R: FieldChain = assumption_chain!("r");
pub const ASSUMPTION_Q: FieldChain = assumption_chain!("q");
pub const ASSUMPTION_TIME_TO_EXP: FieldChain = assumption_chain!("time_to_exp_years");
pub const ASSUMPTION_CONTRACTS: FieldChain = assumption_chain!("contracts");
