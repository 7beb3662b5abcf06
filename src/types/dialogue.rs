use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Who produced a turn. Turns alternate user/system starting at the user;
/// the parity rule lives in `from_turn_index` and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    System,
}

impl Speaker {
    pub fn from_turn_index(index: usize) -> Self {
        if index % 2 == 0 {
            Speaker::User
        } else {
            Speaker::System
        }
    }
}

/// One turn of a dialogue. `dialog_act` maps an act name to a list of
/// `[key, value]` slot pairs; everything else a turn carries (text,
/// metadata, span annotations) passes through untouched via `extra`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Turn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_act: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A dialogue file: a `goal` object keyed by domain, an ordered `log` of
/// turns, and any further top-level keys preserved as-is. A document
/// without `goal` or `log` fails deserialization.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DialogueRecord {
    pub goal: Map<String, Value>,
    pub log: Vec<Turn>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DialogueRecord {
    /// Iterates the log with each turn tagged by its speaker.
    pub fn tagged_turns_mut(&mut self) -> impl Iterator<Item = (Speaker, &mut Turn)> {
        self.log
            .iter_mut()
            .enumerate()
            .map(|(index, turn)| (Speaker::from_turn_index(index), turn))
    }
}
