use serde::{Deserialize, Serialize};

use crate::core::{Outcome, SessionSnapshot};
use crate::types::{Command, PieceTag, Rejected};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceRecord {
    pub kind: String,
    pub id: u64,
}

impl From<PieceTag> for PieceRecord {
    fn from(tag: PieceTag) -> Self {
        Self {
            kind: tag.kind.as_str().to_string(),
            id: tag.id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "ok")]
    Ok,
    #[serde(rename = "rejected")]
    Rejected,
}

/// One journal line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub turn: u64,
    pub command: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub piece: Option<PieceRecord>,
    pub queue: Vec<PieceRecord>,
    pub reserve: Vec<PieceRecord>,
}

impl TurnRecord {
    /// Build the record for `command`, given its result and the state after it.
    pub fn new(command: Command, result: &Result<Outcome, Rejected>, after: &SessionSnapshot) -> Self {
        let (status, code, message, piece) = match result {
            Ok(outcome) => (
                Status::Ok,
                None,
                outcome.to_string(),
                outcome.piece().map(PieceRecord::from),
            ),
            Err(reason) => (
                Status::Rejected,
                Some(reason.code().to_string()),
                reason.message().to_string(),
                None,
            ),
        };
        Self {
            turn: after.turn,
            command: command.as_str().to_string(),
            status,
            code,
            message,
            piece,
            queue: after.queue.iter().copied().map(PieceRecord::from).collect(),
            reserve: after.reserve.iter().copied().map(PieceRecord::from).collect(),
        }
    }
}
