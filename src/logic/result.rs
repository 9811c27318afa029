//! Result assembler: package a finished draw for the host.

use crate::models::{DrawOptions, DrawResult, Participant};
use serde::Serialize;

/// Both outputs of a draw. `participants` is for immediate display; `result` is the
/// record a host keeps. They hold the same participant data.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DrawOutcome {
    pub participants: Vec<Participant>,
    pub result: DrawResult,
}

pub fn assemble_result(options: DrawOptions, participants: Vec<Participant>) -> DrawOutcome {
    DrawOutcome {
        participants: participants.clone(),
        result: DrawResult {
            options,
            participants,
        },
    }
}
