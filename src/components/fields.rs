use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::state::forms::FieldMark;

/// Inline border for a validated control, empty until the form is submitted.
pub fn mark_style(mark: FieldMark) -> String {
    mark.border_color()
        .map(|color| format!("border-color: {};", color))
        .unwrap_or_default()
}

/// Drives a `<select>`'s live value from state. An option's `selected`
/// attribute no longer moves the selection once the user has picked by hand,
/// so pre-fills and resets set the value directly.
#[hook]
pub fn use_select_value(value: String) -> NodeRef {
    let node = use_node_ref();
    {
        let node = node.clone();
        use_effect_with_deps(
            move |value: &String| {
                if let Some(select) = node.cast::<HtmlSelectElement>() {
                    if select.value() != *value {
                        select.set_value(value);
                    }
                }
                || ()
            },
            value,
        );
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_only_after_validation() {
        assert_eq!(mark_style(FieldMark::Untouched), "");
        assert_eq!(mark_style(FieldMark::Invalid), "border-color: #e74c3c;");
        assert_eq!(mark_style(FieldMark::Valid), "border-color: #e8e8e8;");
    }
}
