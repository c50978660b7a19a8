use serde::{Deserialize, Serialize};

pub mod confirm;
pub mod draw;
pub mod geometry;
pub mod naming;
pub mod session;
pub mod theme;


pub use draw::{initial_image, DrawSession, Effect};
pub use geometry::{client_to_canvas, Rect, SurfaceSize};
pub use naming::{ChoiceIds, SurfaceIds};

/// Status the backend answers with once the access-token cookie has expired.
pub const SESSION_GONE_STATUS: u16 = 410;
/// Where the page navigates to when the session is gone.
pub const SESSION_GONE_REDIRECT: &str = "/";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemType {
    #[serde(rename = "image")]
    Image,
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "mc")]
    Choice,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ResponseValue {
    Text(String),
    Flag(bool),
}

/// Body posted to an item's form action.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SubmitRequest {
    pub response: ResponseValue,
    pub item_type: ItemType,
}

impl SubmitRequest {
    /// `data_url` is the full `data:image/png;base64,...` string; the backend strips the prefix.
    pub fn image(data_url: impl Into<String>) -> Self {
        Self {
            response: ResponseValue::Text(data_url.into()),
            item_type: ItemType::Image,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            response: ResponseValue::Text(text.into()),
            item_type: ItemType::Text,
        }
    }

    pub fn choice(checked_yes: bool) -> Self {
        Self {
            response: ResponseValue::Flag(checked_yes),
            item_type: ItemType::Choice,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    SessionExpired,
}

impl SubmitOutcome {
    /// The reply body is ignored; only the status carries meaning.
    pub fn from_status(status: u16) -> Self {
        if status == SESSION_GONE_STATUS {
            Self::SessionExpired
        } else {
            Self::Accepted
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("could not encode submission: {0}")]
    Encode(String),
    #[error("{0}")]
    Transport(String),
}
