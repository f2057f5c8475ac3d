// src/core/net.rs

// Market page retrieval: a prioritized list of strategies tried in order,
// one bounded attempt each, until a body passes the marker check.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{
    ACCEPT, ACCEPT_LANGUAGE, FETCH_TIMEOUT_SECS, PAGE_MARKER, RELAY_PREFIXES, USER_AGENT,
};
use crate::progress::Progress;

/// One way of requesting the target page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Plain GET with a browser-like header set.
    Direct,
    /// Public CORS relay wrapping the percent-encoded target URL.
    Relay(&'static str),
}

impl Strategy {
    pub fn request_url(&self, target: &str) -> String {
        match self {
            Strategy::Direct => s!(target),
            Strategy::Relay(prefix) => join!(*prefix, &encode_component(target)),
        }
    }

    /// Short name for logs and the status line.
    pub fn label(&self) -> String {
        match self {
            Strategy::Direct => s!("direct"),
            Strategy::Relay(prefix) => {
                let rest = prefix.strip_prefix("https://").unwrap_or(prefix);
                let host = rest.split('/').next().unwrap_or(rest);
                s!(host)
            }
        }
    }
}

/// Direct request first, then each relay in listed order.
pub fn ladder() -> Vec<Strategy> {
    let mut v = vec![Strategy::Direct];
    v.extend(RELAY_PREFIXES.iter().map(|&p| Strategy::Relay(p)));
    v
}

/// Outcome of running the whole ladder.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Body passed the marker check; `via` names the strategy that worked.
    Success { body: String, via: String },
    /// Every attempt failed or was rejected by the marker check.
    Exhausted { last_error: String },
}

/// Run the ladder against `target`. Each attempt has its own timeout; a
/// response only counts if the body contains `marker` (relays are happy to
/// return their own error pages with status 200).
pub fn fetch_document(
    target: &str,
    marker: &str,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> FetchOutcome {
    let strategies = ladder();
    let total = strategies.len();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(total);
    }

    let client = match Client::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()
    {
        Ok(c) => c,
        Err(e) => {
            let last_error = format!("client setup: {e}");
            loge!("{last_error}");
            return FetchOutcome::Exhausted { last_error };
        }
    };

    let mut last_error = s!("no fetch strategies configured");

    for (i, strategy) in strategies.iter().enumerate() {
        let label = strategy.label();
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Fetching via {} ({}/{})", label, i + 1, total));
        }

        match attempt(&client, strategy, target) {
            Ok(body) if body.contains(marker) => {
                logf!("Fetch ok via {label} ({} bytes)", body.len());
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&label);
                }
                return FetchOutcome::Success { body, via: label };
            }
            Ok(_) => {
                last_error = format!("{label}: response is not the market page");
                logd!("{last_error}");
            }
            Err(e) => {
                last_error = format!("{label}: {e}");
                logd!("Attempt failed: {last_error}");
            }
        }
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&label);
        }
    }

    loge!("All fetch strategies exhausted: {last_error}");
    FetchOutcome::Exhausted { last_error }
}

/// Convenience: the default marker from config.
pub fn fetch_market_page(target: &str, progress: Option<&mut (dyn Progress + '_)>) -> FetchOutcome {
    fetch_document(target, PAGE_MARKER, progress)
}

fn attempt(client: &Client, strategy: &Strategy, target: &str) -> Result<String, String> {
    let url = strategy.request_url(target);
    let mut req = client.get(&url);
    if matches!(strategy, Strategy::Direct) {
        // The site serves a bot page to unknown clients; look like a browser.
        req = req
            .header("User-Agent", USER_AGENT)
            .header("Accept", ACCEPT)
            .header("Accept-Language", ACCEPT_LANGUAGE);
    }

    let resp = req.send().map_err(|e| format!("request: {e}"))?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("status {status}"));
    }
    resp.text().map_err(|e| format!("read body: {e}"))
}

/// Percent-encode for use as a relay query parameter.
/// Same unreserved set browsers use for URI components.
pub fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 3);
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9'
            | b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')' => {
                out.push(b as char);
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}
