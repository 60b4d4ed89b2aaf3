//! `sitelens analyze <url>` – load a site and print its overview and cards.

use anyhow::Result;
use sitelens_core::config::SiteLensConfig;
use sitelens_core::{LoadOutcome, LoadedSite, SiteDescriptorLoader};
use std::fmt::{self, Write};

use super::step_error;

pub async fn run_analyze(cfg: &SiteLensConfig, url: &str, json: bool) -> Result<()> {
    let loader = SiteDescriptorLoader::from_config(cfg);
    let site = match loader.load(url).await.map_err(step_error)? {
        LoadOutcome::Applied(site) => site,
        LoadOutcome::Superseded => anyhow::bail!("load of {url} was superseded"),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&*site)?);
    } else {
        let mut out = String::new();
        render_site(&site, &mut out)?;
        print!("{out}");
    }
    Ok(())
}

/// Text rendering of the overview followed by one card per item.
fn render_site(site: &LoadedSite, out: &mut impl Write) -> fmt::Result {
    let o = &site.overview;
    writeln!(out, "Site Overview ({})", site.descriptor_url)?;
    writeln!(out, "  Name:         {}", o.name)?;
    writeln!(out, "  Description:  {}", o.description)?;
    if let Some(logo) = &o.logo {
        writeln!(out, "  Logo:         {}", logo)?;
    }
    writeln!(out, "  Theme:        {}", o.theme)?;
    writeln!(out, "  Created:      {}", o.created)?;
    writeln!(out, "  Last Updated: {}", o.updated)?;
    writeln!(out, "  Hex Code:     {}", o.hex_code)?;
    writeln!(out, "  Icon:         {}", o.icon)?;
    writeln!(out)?;

    if site.items.is_empty() {
        writeln!(out, "No items.")?;
        return Ok(());
    }
    writeln!(out, "{} item(s)", site.items.len())?;
    for (i, item) in site.items.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "[{}] {}", i + 1, item.title)?;
        writeln!(out, "    Last updated: {}", item.updated_label)?;
        writeln!(out, "    {}", item.description)?;
        if let Some(thumb) = &item.thumbnail {
            writeln!(out, "    Image:  {}", thumb)?;
        }
        writeln!(out, "    Page:   {}", item.page_link)?;
        writeln!(out, "    Source: {}", item.source_link)?;
    }
    Ok(())
}
