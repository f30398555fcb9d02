//! `acd get` – fetch a URL through the retrying transport.

use anyhow::{bail, Context, Result};
use acd_core::config::AcdConfig;
use acd_core::transport::HttpClient;
use url::{ParseError, Url};

/// Resolve `target` to an absolute URL. Relative paths are joined onto the
/// metadata endpoint, or the content endpoint when `content` is set.
pub fn resolve_target(cfg: &AcdConfig, target: &str, content: bool) -> Result<Url> {
    let url = match Url::parse(target) {
        Ok(url) => url,
        Err(ParseError::RelativeUrlWithoutBase) => {
            let base = if content { &cfg.content_url } else { &cfg.metadata_url };
            let base = Url::parse(base).with_context(|| format!("invalid endpoint URL {}", base))?;
            base.join(target)
                .with_context(|| format!("cannot join {} onto {}", target, base))?
        }
        Err(e) => return Err(e).with_context(|| format!("invalid URL {}", target)),
    };
    if !matches!(url.scheme(), "http" | "https") {
        bail!("unsupported scheme {} (expected http or https)", url.scheme());
    }
    Ok(url)
}

pub fn run_get(cfg: &AcdConfig, target: &str, content: bool) -> Result<()> {
    let url = resolve_target(cfg, target, content)?;

    let client = HttpClient::from_config(cfg);
    let resp = client.get_with_retry(url.as_str())?;
    tracing::info!("GET {} -> {}", url, resp.status);
    let resp = resp.ensure_ok()?;
    println!("{} {} bytes", resp.status, resp.body.len());
    Ok(())
}
