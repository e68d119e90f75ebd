//! src/confirm/persona.rs
//! ============================================================================
//! # Persona: Named Response Profiles
//!
//! Each persona flavours the canned confirmation messages. Exactly one is
//! active per session; `p` cycles through the list at runtime.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub id: String,
    pub name: String,
    pub role: String,
    /// Avatar reference; display-only.
    pub avatar: String,
    /// Profile blurb shown in the help overlay.
    pub description: String,
    pub theme_color: String,
}

/// Built-in persona roster used when the config file does not override it.
pub fn default_personas() -> Vec<Persona> {
    vec![
        Persona {
            id: "sysadmin".to_owned(),
            name: "Gilfoyle".to_owned(),
            role: "Cynical Sysadmin".to_owned(),
            avatar: "https://picsum.photos/id/1/200/200".to_owned(),
            description: "A brilliant but cynical system administrator who \
                          judges your file organization habits. Sarcastic \
                          but efficient."
                .to_owned(),
            theme_color: "zinc".to_owned(),
        },
        Persona {
            id: "butler".to_owned(),
            name: "Alfred".to_owned(),
            role: "Digital Butler".to_owned(),
            avatar: "https://picsum.photos/id/1074/200/200".to_owned(),
            description: "A polite, sophisticated butler organizing the \
                          master's digital estate. Incredibly formal and \
                          helpful."
                .to_owned(),
            theme_color: "slate".to_owned(),
        },
        Persona {
            id: "gamer".to_owned(),
            name: "Xx_Slayer_xX".to_owned(),
            role: "Media Hoarder".to_owned(),
            avatar: "https://picsum.photos/id/1062/200/200".to_owned(),
            description: "An enthusiastic gamer and media collector. Lots of \
                          gaming slang, loves high bitrate content."
                .to_owned(),
            theme_color: "purple".to_owned(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_has_unique_ids_and_sysadmin_first() {
        let personas = default_personas();
        assert_eq!(personas[0].id, "sysadmin");
        let mut ids: Vec<&str> = personas.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), personas.len());
    }
}
