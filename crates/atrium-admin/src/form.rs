//! Form-mode helpers shared by the CRUD modals.

use serde::{Deserialize, Serialize};

/// What a CRUD modal was opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormMode {
    Create,
    Update,
    Read,
}

/// Builds a modal title from the mode and the subject noun.
///
/// An absent mode yields an empty title; the modal is not yet open.
///
/// # Example
///
/// ```
/// use atrium_admin::{modal_title, FormMode};
///
/// assert_eq!(modal_title(Some(FormMode::Create), "角色"), "新建角色");
/// assert_eq!(modal_title(Some(FormMode::Update), "角色"), "编辑角色");
/// assert_eq!(modal_title(Some(FormMode::Read), "角色"), "查看角色");
/// assert_eq!(modal_title(None, "角色"), "");
/// ```
#[must_use]
pub fn modal_title(mode: Option<FormMode>, subject: &str) -> String {
    match mode {
        Some(FormMode::Create) => format!("新建{subject}"),
        Some(FormMode::Update) => format!("编辑{subject}"),
        Some(FormMode::Read) => format!("查看{subject}"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_prefix_the_subject() {
        assert_eq!(modal_title(Some(FormMode::Create), "订单"), "新建订单");
        assert_eq!(modal_title(None, "订单"), "");
    }
}
