//! Draw options form: raw user input to validated DrawOptions.

use crate::models::{DrawError, DrawOptions, DrawResult, GameplayMode};
use serde::{Deserialize, Serialize};

/// Value of a form field the user has not set yet.
pub const PLACEHOLDER: &str = "null";

/// Raw form fields, as a host UI collects them.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DrawForm {
    pub group_id: String,
    pub selection_id: String,
    pub teams_per_participant: String,
    pub gameplay_mode: String,
    pub allow_repeats: String,
}

impl Default for DrawForm {
    fn default() -> Self {
        Self {
            group_id: PLACEHOLDER.to_string(),
            selection_id: PLACEHOLDER.to_string(),
            teams_per_participant: PLACEHOLDER.to_string(),
            gameplay_mode: PLACEHOLDER.to_string(),
            allow_repeats: PLACEHOLDER.to_string(),
        }
    }
}

impl DrawForm {
    /// Pre-fill the form from an earlier draw so it can be shown again.
    pub fn from_previous(previous: &DrawResult) -> Self {
        let o = &previous.options;
        Self {
            group_id: o.group_id.to_string(),
            selection_id: o.selection_id.to_string(),
            teams_per_participant: o.teams_per_participant.to_string(),
            gameplay_mode: o.gameplay_mode.code().to_string(),
            allow_repeats: o.allow_repeats.to_string(),
        }
    }

    fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("group_id", self.group_id.as_str()),
            ("selection_id", self.selection_id.as_str()),
            ("teams_per_participant", self.teams_per_participant.as_str()),
            ("gameplay_mode", self.gameplay_mode.as_str()),
            ("allow_repeats", self.allow_repeats.as_str()),
        ]
    }

    /// Names of the fields still unset.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.fields()
            .into_iter()
            .filter(|(_, v)| !is_set(v))
            .map(|(field, _)| field)
            .collect()
    }

    /// Whether every field holds a real value (the form may be submitted).
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

fn is_set(value: &str) -> bool {
    let v = value.trim();
    !v.is_empty() && v != PLACEHOLDER
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, DrawError> {
    if is_set(value) {
        Ok(value.trim())
    } else {
        Err(DrawError::MissingField(field))
    }
}

fn parse_id(field: &'static str, value: &str) -> Result<u32, DrawError> {
    let v = required(field, value)?;
    v.parse().map_err(|_| DrawError::InvalidField {
        field,
        value: v.to_string(),
    })
}

fn parse_mode(value: &str) -> Result<GameplayMode, DrawError> {
    let v = required("gameplay_mode", value)?;
    match v.to_ascii_lowercase().as_str() {
        "single" | "0" => Ok(GameplayMode::Single),
        "pair" | "1" => Ok(GameplayMode::Pair),
        _ => Err(DrawError::InvalidField {
            field: "gameplay_mode",
            value: v.to_string(),
        }),
    }
}

impl TryFrom<&DrawForm> for DrawOptions {
    type Error = DrawError;

    fn try_from(form: &DrawForm) -> Result<Self, Self::Error> {
        let group_id = parse_id("group_id", &form.group_id)?;
        let selection_id = parse_id("selection_id", &form.selection_id)?;

        let raw = required("teams_per_participant", &form.teams_per_participant)?;
        let n: i64 = raw.parse().map_err(|_| DrawError::InvalidField {
            field: "teams_per_participant",
            value: raw.to_string(),
        })?;
        let teams_per_participant = u32::try_from(n)
            .ok()
            .filter(|&n| n >= 1)
            .ok_or(DrawError::InvalidTeamsPerParticipant(n))?;

        let gameplay_mode = parse_mode(&form.gameplay_mode)?;
        // Anything but "true" means no repeats.
        let allow_repeats = required("allow_repeats", &form.allow_repeats)? == "true";

        Ok(DrawOptions {
            group_id,
            selection_id,
            teams_per_participant,
            gameplay_mode,
            allow_repeats,
        })
    }
}
