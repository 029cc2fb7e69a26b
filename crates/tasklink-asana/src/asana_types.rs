use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Section of an Asana project.
pub struct AsanaSection {
    pub gid: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AsanaTaskParent {
    pub gid: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Subset of an Asana task record needed for dispatch decisions.
pub struct AsanaTask {
    pub gid: String,
    #[serde(default)]
    pub parent: Option<AsanaTaskParent>,
}

impl AsanaTask {
    pub fn is_subtask(&self) -> bool {
        self.parent.is_some()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AsanaDataEnvelope<T> {
    pub(crate) data: T,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AsanaNextPage {
    pub(crate) offset: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AsanaPageEnvelope<T> {
    pub(crate) data: Vec<T>,
    #[serde(default)]
    pub(crate) next_page: Option<AsanaNextPage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AsanaErrorEntry {
    pub(crate) message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AsanaErrorEnvelope {
    #[serde(default)]
    pub(crate) errors: Vec<AsanaErrorEntry>,
}
