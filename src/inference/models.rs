// Responses API wire types
// Author: kelexine (https://github.com/kelexine)

use serde::{Deserialize, Serialize};

/// Body for `POST /responses`.
#[derive(Debug, Clone, Serialize)]
pub struct ResponsesRequest<'a> {
    pub model: &'a str,
    pub temperature: f32,
    pub input: Vec<InputMessage<'a>>,
}

impl<'a> ResponsesRequest<'a> {
    /// Single user turn carrying the instruction text and one image,
    /// sampled at temperature 0.
    pub fn vision(model: &'a str, prompt: &'a str, image_url: &'a str) -> Self {
        Self {
            model,
            temperature: 0.0,
            input: vec![InputMessage {
                role: "user",
                content: vec![
                    InputContent::InputText { text: prompt },
                    InputContent::InputImage { image_url },
                ],
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InputMessage<'a> {
    pub role: &'a str,
    pub content: Vec<InputContent<'a>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputContent<'a> {
    InputText { text: &'a str },
    InputImage { image_url: &'a str },
}

/// Subset of a Responses API reply we read text from.
///
/// SDKs flatten text into `output_text`; the raw API only returns
/// `output[].content[].text`. Either may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponsesBody {
    #[serde(default)]
    pub output_text: Option<String>,
    #[serde(default)]
    pub output: Option<Vec<OutputItem>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OutputItem {
    #[serde(default)]
    pub content: Option<Vec<OutputFragment>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OutputFragment {
    #[serde(default)]
    pub text: Option<String>,
}

/// Error envelope: `{"error": {"message": "...", "type": "...", "code": ...}}`
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
}

/// Where the model's text lives in a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseShape {
    /// Pre-flattened `output_text`.
    Flattened(String),
    /// Structured output items with content fragments.
    Structured(Vec<OutputItem>),
    /// Neither field present.
    Empty,
}

impl From<ResponsesBody> for ResponseShape {
    fn from(body: ResponsesBody) -> Self {
        match (body.output_text, body.output) {
            (Some(text), _) if !text.is_empty() => ResponseShape::Flattened(text),
            (_, Some(items)) => ResponseShape::Structured(items),
            _ => ResponseShape::Empty,
        }
    }
}

impl ResponseShape {
    /// Collapse the reply into a single string.
    ///
    /// Fragments within an item are concatenated, items are joined with
    /// `\n`. Missing text counts as empty.
    pub fn into_text(self) -> String {
        match self {
            ResponseShape::Flattened(text) => text,
            ResponseShape::Structured(items) => items
                .into_iter()
                .map(|item| {
                    item.content
                        .unwrap_or_default()
                        .into_iter()
                        .filter_map(|fragment| fragment.text)
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join("\n"),
            ResponseShape::Empty => String::new(),
        }
    }
}
