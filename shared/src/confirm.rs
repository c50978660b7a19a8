//! Account deletion is guarded by a confirmation checkbox; the delete button
//! stays disabled until the box is ticked.

pub const DISABLED_CLASS: &str = "disabled";
pub const ARIA_DISABLED_ATTRIBUTE: &str = "aria-disabled";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteButton {
    Enabled,
    Disabled,
}

impl DeleteButton {
    pub fn for_confirmation(confirmed: bool) -> Self {
        if confirmed {
            DeleteButton::Enabled
        } else {
            DeleteButton::Disabled
        }
    }

    pub fn is_disabled(self) -> bool {
        self == DeleteButton::Disabled
    }

    pub fn aria_disabled(self) -> &'static str {
        if self.is_disabled() {
            "true"
        } else {
            "false"
        }
    }
}
