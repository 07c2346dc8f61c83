//! Domain-aware sampling of variable values.
//!
//! Uniform sampling over [-10, 10] would keep hitting domain
//! violations in finance-flavored expressions (negative stock prices,
//! volatilities over 1, near-poles), so variable names are matched
//! against naming-convention heuristics to pick a plausible range.
//! First matching rule wins.

use rand::Rng;

/// Sample one value for a variable by name.
pub fn sample_value<R: Rng + ?Sized>(name: &str, rng: &mut R) -> f64 {
    let (lo, hi) = sample_range(name);
    rng.random_range(lo..hi)
}

/// The half-open range a variable name is sampled from.
pub fn sample_range(name: &str) -> (f64, f64) {
    let n = name.to_ascii_lowercase();
    match n.as_str() {
        // spot/stock price
        "s" | "t" | "s0" | "t0" => (50.0, 150.0),
        // strike price
        "k" => (50.0, 150.0),
        // rate / time-to-expiry
        "r" => (0.01, 0.5),
        _ if n.contains("sigma") => (0.1, 0.5), // volatility
        _ if n.contains("lambda") => (-5.0, 5.0), // jump/intensity parameter
        // portfolio weight: w, w1, w2, ...
        _ if is_weight(&n) => (0.0, 1.0),
        // generic algebra variables and the fallback share a range
        _ => (-10.0, 10.0),
    }
}

fn is_weight(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next() == Some('w') && chars.all(|c| c.is_ascii_digit())
}
