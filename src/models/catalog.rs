//! Catalog: the groups and selections a host keeps, with lookup by id.

use crate::models::draw::DrawError;
use crate::models::player::{Group, GroupId};
use crate::models::team::{Selection, SelectionId};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub selections: Vec<Selection>,
}

impl Catalog {
    /// Parse a catalog from JSON (`{"groups": [...], "selections": [...]}`).
    pub fn from_json_str(json: &str) -> Result<Self, DrawError> {
        serde_json::from_str(json).map_err(|e| DrawError::Catalog(e.to_string()))
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn selection(&self, id: SelectionId) -> Option<&Selection> {
        self.selections.iter().find(|s| s.id == id)
    }
}
