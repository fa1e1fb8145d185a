//! User-agent pools and per-engine random selection.
//!
//! Engines differ in which client signatures they tolerate, so each engine
//! draws from its own set of pools. A fresh agent is picked once per engine
//! per run and reported in the output header.

use rand::seq::SliceRandom;

/// Fallback agent when selection is given no pools.
pub const DEFAULT_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0";

/// Firefox desktop agents.
pub const FIREFOX: &[&str] = &[
    "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:120.0) Gecko/20100101 Firefox/120.0",
];

/// Chrome desktop agents.
pub const CHROME: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
];

/// Edge desktop agents.
pub const EDGE: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.0.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.0.0 Safari/537.36 Edg/118.0.2088.76",
];

/// Safari desktop agents.
pub const SAFARI: &[&str] = &[
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.6 Safari/605.1.15",
];

/// Picks a random agent from a random pool.
///
/// Returns [`DEFAULT_AGENT`] when no non-empty pool is supplied.
pub fn random_agent(pools: &[&'static [&'static str]]) -> &'static str {
    let mut rng = rand::thread_rng();
    pools
        .choose(&mut rng)
        .and_then(|pool| pool.choose(&mut rng))
        .copied()
        .unwrap_or(DEFAULT_AGENT)
}
