//! Who made an image, and what you're allowed to do with it.

#[derive(Clone, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Copyright {
    pub license: License,

    /// Where the image came from.
    #[serde(default)]
    pub origin: String,

    // each of these lists is in display order. never sort them!
    #[serde(default)]
    pub creators: Vec<Author>,
    #[serde(default)]
    pub processors: Vec<Author>,
    #[serde(default)]
    pub rightsholders: Vec<Author>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agreement_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<String>,
}

impl Copyright {
    /// Every author, in display order: creators, then processors, then
    /// rightsholders.
    pub fn authors(&self) -> impl Iterator<Item = &Author> {
        self.creators
            .iter()
            .chain(self.processors.iter())
            .chain(self.rightsholders.iter())
    }
}

#[derive(Clone, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct License {
    /// The license code, like `CC-BY-SA-4.0`.
    pub license: String,

    /// Human-readable description.
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Author {
    /// The author's role, like "Fotograf" or "Leverandør".
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
}

impl Author {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
        }
    }
}
