//! Display text for webhook action verbs.

/// Used when the envelope carries no action.
pub const DEFAULT_ACTION_TEXT: &str = "编辑";

/// Known verbs and how they read on a card.
static VOCABULARY: &[(&str, &str)] = &[
    ("created", "创建"),
    ("opened", "创建"),
    ("submitted", "创建"),
    ("closed", "关闭"),
    ("reopened", "重新打开"),
    ("labeled", "添加标签"),
    ("unlabeled", "移除标签"),
    ("assigned", "指派"),
    ("unassigned", "取消指派"),
    ("edited", "编辑"),
    ("deleted", "删除"),
    ("synchronize", "更新"),
    ("review_requested", "请求审核"),
];

/// Translate an action verb. Unknown verbs pass through verbatim; a missing
/// or empty action reads as an edit.
#[must_use]
pub fn action_text(action: Option<&str>) -> String {
    match action.filter(|action| !action.is_empty()) {
        None => DEFAULT_ACTION_TEXT.to_string(),
        Some(action) => VOCABULARY
            .iter()
            .find(|(verb, _)| *verb == action)
            .map_or(action, |(_, text)| *text)
            .to_string(),
    }
}
