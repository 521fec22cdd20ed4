//! Registry item kinds

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Namespace prefix carried by every serialized kind.
pub const KIND_PREFIX: &str = "registry:";

/// The closed set of distributable item kinds.
///
/// Serialized with the `registry:` prefix (`registry:ui`, ...). The kind
/// decides where a file is installed and whether the entry gets a detail
/// artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemType {
    #[serde(rename = "registry:ui")]
    Ui,
    #[serde(rename = "registry:lib")]
    Lib,
    #[serde(rename = "registry:hook")]
    Hook,
    #[serde(rename = "registry:block")]
    Block,
    #[serde(rename = "registry:example")]
    Example,
}

impl ItemType {
    /// All kinds, in declaration order.
    pub const ALL: [ItemType; 5] = [
        ItemType::Ui,
        ItemType::Lib,
        ItemType::Hook,
        ItemType::Block,
        ItemType::Example,
    ];

    /// Bare kind name without the namespace prefix.
    pub fn kind(&self) -> &'static str {
        match self {
            ItemType::Ui => "ui",
            ItemType::Lib => "lib",
            ItemType::Hook => "hook",
            ItemType::Block => "block",
            ItemType::Example => "example",
        }
    }

    /// Serialized name, e.g. `registry:ui`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Ui => "registry:ui",
            ItemType::Lib => "registry:lib",
            ItemType::Hook => "registry:hook",
            ItemType::Block => "registry:block",
            ItemType::Example => "registry:example",
        }
    }

    /// Folder a file of this kind is installed into inside a consumer project.
    pub fn install_dir(&self) -> &'static str {
        match self {
            ItemType::Ui => "components/ui",
            ItemType::Lib => "lib",
            ItemType::Hook => "hooks",
            ItemType::Block | ItemType::Example => "components",
        }
    }

    /// Whether entries of this kind get a `<name>.json` detail artifact.
    pub fn is_detail_eligible(&self) -> bool {
        match self {
            ItemType::Ui | ItemType::Lib | ItemType::Hook | ItemType::Block | ItemType::Example => {
                true
            }
        }
    }

    /// Parse a list of kind names, rejecting the first unknown one.
    pub fn parse_list<S: AsRef<str>>(kinds: &[S]) -> Result<Vec<ItemType>, Error> {
        kinds.iter().map(|k| k.as_ref().parse()).collect()
    }
}

impl FromStr for ItemType {
    type Err = Error;

    /// Accepts both the bare (`ui`) and the prefixed (`registry:ui`) form.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bare = trimmed.strip_prefix(KIND_PREFIX).unwrap_or(trimmed);
        ItemType::ALL
            .into_iter()
            .find(|kind| kind.kind() == bare)
            .ok_or_else(|| Error::InvalidKind {
                kind: s.to_string(),
            })
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
