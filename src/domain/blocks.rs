use serde::{Deserialize, Serialize};

/// One atomic unit of the rendered changelog.
///
/// Serializes with a `type` tag so the artifact is self-describing:
/// `{"type":"header","text":"..."}`, `{"type":"section","text":"..."}`,
/// `{"type":"divider"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RenderBlock {
    Header { text: String },
    Section { text: String },
    Divider,
}

impl RenderBlock {
    pub fn header(text: impl Into<String>) -> Self {
        RenderBlock::Header { text: text.into() }
    }

    pub fn section(text: impl Into<String>) -> Self {
        RenderBlock::Section { text: text.into() }
    }
}

/// The final changelog artifact: a title plus the ordered block sequence.
///
/// Immutable once produced; delivery hands it to each destination unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogPayload {
    pub text: String,
    pub blocks: Vec<RenderBlock>,
}

impl ChangelogPayload {
    /// Plain-text rendering of the block sequence, one block per line.
    pub fn to_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.blocks.len());
        for block in &self.blocks {
            match block {
                RenderBlock::Header { text } => lines.push(text.clone()),
                RenderBlock::Section { text } => lines.push(text.clone()),
                RenderBlock::Divider => lines.push("---".to_string()),
            }
        }
        lines.join("\n")
    }
}
