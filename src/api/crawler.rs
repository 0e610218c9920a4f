//! Link-Preview Detection
//!
//! Classifies a viewer as an automated link previewer from its User-Agent.
//! The vault only consumes the boolean verdict.

/// Case-insensitive User-Agent fragments of known crawlers and chat unfurlers.
const PREVIEWER_MARKERS: &[&str] = &[
    "bot",
    "crawler",
    "spider",
    "preview",
    "facebook",
    "twitter",
    "linkedin",
    "slack",
    "discord",
    "whatsapp",
    "messenger",
];

/// Returns true if `user_agent` looks like an automated link previewer.
pub fn is_link_previewer(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    PREVIEWER_MARKERS.iter().any(|marker| ua.contains(marker))
}
