//! Terminal summaries of pool state

use crate::liquidity::PoolSnapshot;

/// Format a snapshot as a text summary
pub fn format_summary(snapshot: &PoolSnapshot) -> String {
    let invariant = match snapshot.invariant {
        Some(_) if snapshot.is_invariant_overflowed() => format!("{:>18}", "overflow (inf)"),
        Some(k) if snapshot.is_invariant_current() => format!("{:>18.4}", k),
        Some(k) => format!("{:>18.4} (stale)", k),
        None => format!("{:>18}", "not computed"),
    };
    let price = snapshot
        .price_a_in_b()
        .map(|p| format!("{:>18.6}", p))
        .unwrap_or_else(|| format!("{:>18}", "n/a"));

    format!(
        r#"
╔══════════════════════════════════════════════════╗
║            POOL STATE                            ║
╠══════════════════════════════════════════════════╝
║
║  SUPPLY
║  ──────
║  Asset A:        {:>18.4}
║  Asset B:        {:>18.4}
║
║  RESERVES
║  ────────
║  Reserve A:      {:>18.4}
║  Reserve B:      {:>18.4}
║  Price A in B:   {}
║
║  INVARIANT (k = A * B)
║  ─────────────────────
║  k:              {}
║
╚══════════════════════════════════════════════════

Generated: {}
"#,
        snapshot.supply_a,
        snapshot.supply_b,
        snapshot.reserve_a,
        snapshot.reserve_b,
        price,
        invariant,
        chrono::DateTime::from_timestamp(snapshot.timestamp, 0)
            .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| snapshot.timestamp.to_string()),
    )
}

/// Print summary to terminal
pub fn print_summary(snapshot: &PoolSnapshot) {
    println!("{}", format_summary(snapshot));
}
