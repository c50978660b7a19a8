//! Element ids the server-rendered pages use for each item.
//!
//! Item forms are rendered with the item id as prefix, so every control of
//! item `X` is addressed as `X-<role>`.

#[cfg(test)]
#[path = "naming_test.rs"]
mod naming_test;

pub const MODE_TOGGLER_ID: &str = "modeToggler";
pub const COOKIE_BANNER_ID: &str = "cookieBanner";
pub const TIMER_BANNER_ID: &str = "timerBanner";
pub const SIDE_LINK_CLASS: &str = "side-link";
pub const SCROLL_PILL_CLASS: &str = "view-scrollpill";
pub const ACTIVE_CLASS: &str = "active";
pub const CONFIRM_DELETION_ID: &str = "confirmUserDeletionCheckbox";
pub const DELETE_BUTTON_ID: &str = "userDeleteButton";

/// Ids of the canvas and its companion controls for one drawing item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurfaceIds {
    pub canvas: String,
    pub banner: String,
    pub clear: String,
    pub submit: String,
    pub save: String,
    /// File input whose form carries the submission endpoint.
    pub image: String,
}

impl SurfaceIds {
    pub fn for_item(item_name: &str) -> Self {
        Self {
            canvas: format!("{item_name}-canvas"),
            banner: format!("{item_name}-submission-banner"),
            clear: format!("{item_name}-clear"),
            submit: format!("{item_name}-submit"),
            save: format!("{item_name}-save"),
            image: format!("{item_name}-image"),
        }
    }
}

pub fn text_response_id(item_name: &str) -> String {
    format!("{item_name}-response")
}

/// The yes/no checkbox pair of a multiple-choice item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceIds {
    pub yes: String,
    pub no: String,
}

impl ChoiceIds {
    pub fn for_item(item_name: &str) -> Self {
        Self {
            yes: format!("{item_name}-1"),
            no: format!("{item_name}-0"),
        }
    }

    /// The box that has to be unchecked when the box standing for `value` changes.
    pub fn opposite(&self, value: bool) -> &str {
        if value {
            &self.no
        } else {
            &self.yes
        }
    }
}
