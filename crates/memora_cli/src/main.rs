//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `memora_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use std::sync::Arc;

fn main() {
    // A tiny probe that exercises core wiring end to end without touching
    // any on-disk state.
    println!("memora_core ping={}", memora_core::ping());
    println!("memora_core version={}", memora_core::core_version());

    match memora_core::open_store_in_memory() {
        Ok(store) => {
            let repos = memora_core::CareRepositories::new(Arc::new(store));
            let journal_len = repos.journal.load().len();
            println!("memora_core store=ok journal_len={journal_len}");
        }
        Err(err) => {
            println!("memora_core store=error {err}");
            std::process::exit(1);
        }
    }
}
