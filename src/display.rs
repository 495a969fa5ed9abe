//! Continuous terminal display of the latest observation

use crate::geo::ObservationResult;
use std::io::{self, Write};

const CLEAR_SCREEN: &str = "\x1b[2J";

/// Render an observation as an aligned block, `unknown` for missing fields
pub fn render(obs: &ObservationResult) -> String {
    let field = |value: Option<&str>| value.unwrap_or("unknown").to_string();
    let ip = if obs.ip.is_empty() {
        "unknown".to_string()
    } else {
        obs.ip.clone()
    };

    let rows = [
        ("IP", ip),
        ("organisation", field(obs.organization.as_deref())),
        ("coordinates", field(obs.coordinates.as_deref())),
        ("city", field(obs.city.as_deref())),
        ("country", field(obs.country.as_deref())),
        ("region", field(obs.region.as_deref())),
    ];

    let mut text = String::new();
    for (label, value) in rows {
        text.push_str(&format!("{:<14}{}\n", format!("{}:", label), value));
    }
    text
}

/// Clear the terminal and draw the observation
pub fn redraw<W: Write>(out: &mut W, obs: &ObservationResult) -> io::Result<()> {
    write!(out, "{}", CLEAR_SCREEN)?;
    writeln!(out)?;
    write!(out, "{}", render(obs))?;
    out.flush()
}
