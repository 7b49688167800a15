use serde::{Deserialize, Serialize};

/// Style names understood by the document renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextStyle {
    /// Invoice-type title.
    #[serde(rename = "header")]
    Title,
    /// Secondary header lines (numbers, periods).
    #[serde(rename = "headerContent")]
    HeaderContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageBlock {
    /// Inline image reference, e.g. `data:image/png;base64,...`.
    pub image: String,
    /// Rendered width in points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

/// One layout primitive of the header.
///
/// Serializes to the renderer's object shape: `{"text": ..}` or `{"image": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    Text(TextBlock),
    Image(ImageBlock),
}

impl Content {
    pub fn text(text: impl Into<String>, style: TextStyle) -> Self {
        Self::Text(TextBlock {
            text: text.into(),
            style: Some(style),
        })
    }

    pub fn image(image: impl Into<String>, width: Option<u32>) -> Self {
        Self::Image(ImageBlock {
            image: image.into(),
            width,
        })
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(block) => Some(&block.text),
            Self::Image(_) => None,
        }
    }

    pub fn as_image(&self) -> Option<&str> {
        match self {
            Self::Text(_) => None,
            Self::Image(block) => Some(&block.image),
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image(_))
    }
}

/// Serialize content blocks to the renderer's JSON document fragment.
#[cfg(feature = "json")]
pub fn to_json(blocks: &[Content]) -> Result<String, crate::core::NaglowekError> {
    serde_json::to_string(blocks).map_err(|e| crate::core::NaglowekError::Json(e.to_string()))
}
