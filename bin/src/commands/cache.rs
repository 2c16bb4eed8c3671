//! Cache command: inspect or clear cached entries.

use crate::config::App;
use anyhow::{Context, Result};
use bourse_lib::CacheKey;

/// List cached keys with their age.
pub(crate) fn list_entries(app: &App) -> Result<()> {
    let keys = app.store.keys().context("Failed to read cache")?;
    if keys.is_empty() {
        println!("Cache is empty.");
        return Ok(());
    }

    let now = app.store.now_millis();
    println!("{:<32} {:>12}", "KEY", "AGE");
    println!("{}", "-".repeat(45));

    for key in &keys {
        let age = app
            .store
            .get(&CacheKey::new(key.as_str()))
            .context("Failed to read cache entry")?
            .map_or_else(|| "-".to_string(), |entry| format_age(entry.age_millis(now)));
        println!("{key:<32} {age:>12}");
    }

    println!("\nTotal: {} entries", keys.len());
    Ok(())
}

/// Remove every entry, or only the family of `prefix`.
pub(crate) fn clear(app: &App, prefix: Option<&str>) -> Result<()> {
    let removed = match prefix {
        Some(prefix) => app.store.clear_prefix(prefix),
        None => app.store.clear(),
    }
    .context("Failed to clear cache")?;

    println!("Removed {removed} entr{}.", if removed == 1 { "y" } else { "ies" });
    Ok(())
}

fn format_age(millis: i64) -> String {
    let secs = millis.max(0) / 1000;
    if secs < 60 {
        format!("{secs}s")
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs < 86_400 {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    } else {
        format!("{}d {}h", secs / 86_400, (secs % 86_400) / 3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_age() {
        assert_eq!(format_age(-5), "0s");
        assert_eq!(format_age(59_999), "59s");
        assert_eq!(format_age(3_600_000), "1h 0m");
        assert_eq!(format_age(90_061_000), "1d 1h");
    }
}
