// src/core/teams.rs
//
// Team abbreviation normalisation. Pick'em sites mix historic and
// alternate codes (JAC/JAX, WSH/WAS, OAK/LV, …); everything that compares
// teams goes through `norm_team` first.

/// (alias, canonical). Codes that are already canonical are not listed.
const TEAM_ALIASES: &[(&str, &str)] = &[
    ("JAC", "JAX"),
    ("WSH", "WAS"),
    ("LA", "LAR"),
    ("STL", "LAR"),
    ("SD", "LAC"),
    ("OAK", "LV"),
    ("LVR", "LV"),
    ("ARZ", "ARI"),
    ("AZ", "ARI"),
    ("TAM", "TB"),
    ("TBB", "TB"),
    ("GNB", "GB"),
    ("KAN", "KC"),
    ("KCC", "KC"),
    ("NWE", "NE"),
    ("NOS", "NO"),
    ("SFO", "SF"),
    ("CLV", "CLE"),
    ("HST", "HOU"),
    ("BLT", "BAL"),
];

/// Uppercase, strip non-letters, resolve aliases. The dash marker is returned as-is.
pub fn norm_team(tok: &str) -> String {
    if tok.is_empty() || tok == "-" {
        return s!(tok);
    }
    let t: String = tok
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    match TEAM_ALIASES.iter().find(|(alias, _)| *alias == t) {
        Some((_, canon)) => s!(*canon),
        None => t,
    }
}

/// A bare team token line: 2–4 ASCII letters.
pub fn is_team_token(s: &str) -> bool {
    (2..=4).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_resolve() {
        assert_eq!(norm_team("jac"), "JAX");
        assert_eq!(norm_team("WSH"), "WAS");
        assert_eq!(norm_team("OAK"), "LV");
        assert_eq!(norm_team("KC"), "KC");
        assert_eq!(norm_team("-"), "-");
    }

    #[test]
    fn team_tokens() {
        assert!(is_team_token("KC"));
        assert!(is_team_token("Jax"));
        assert!(!is_team_token("TIE1"));
        assert!(!is_team_token("K"));
        assert!(!is_team_token("Alice"));
    }
}
