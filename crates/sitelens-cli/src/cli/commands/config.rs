//! `sitelens config` – show where settings come from and their values.

use anyhow::Result;
use sitelens_core::config::{self, SiteLensConfig};
use std::path::Path;

pub fn run_config(cfg: &SiteLensConfig, explicit: Option<&Path>) -> Result<()> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => config::config_path()?,
    };
    let display = cfg.display_options();
    println!("config file:      {}", path.display());
    println!("connect timeout:  {}s", cfg.connect_timeout_secs);
    println!("timeout:          {}s", cfg.timeout_secs);
    println!("max redirections: {}", cfg.max_redirections);
    println!(
        "user agent:       {}",
        cfg.user_agent.as_deref().unwrap_or("-")
    );
    println!("date format:      {}", display.date_format);
    println!("source suffix:    {}", display.source_suffix);
    Ok(())
}
