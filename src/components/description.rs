use yew::prelude::*;

/// Character count past which a description starts collapsed.
const DESCRIPTION_LIMIT: usize = 128;

/// Text to show for the current expansion state, plus whether a More/Less
/// link is warranted at all.
pub fn display_description(text: &str, expanded: bool) -> (String, bool) {
    let truncatable = text.chars().count() > DESCRIPTION_LIMIT;
    let shown = if truncatable && !expanded {
        let mut s: String = text.chars().take(DESCRIPTION_LIMIT).collect();
        s.push_str("...");
        s
    } else {
        text.to_string()
    };
    (shown, truncatable)
}

#[derive(Properties, PartialEq, Clone)]
pub struct DescriptionSectionProps {
    pub text: &'static str,
    pub expanded: bool,
    pub on_toggle: Callback<()>,
}

#[function_component(DescriptionSection)]
pub fn description_section(props: &DescriptionSectionProps) -> Html {
    let (shown, truncatable) = display_description(props.text, props.expanded);
    let toggle = {
        let cb = props.on_toggle.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="margin-top:10px;">
            <h3 style="margin:0 0 4px 0; font-size:12px; color:#8b949e;">{"Description"}</h3>
            <p style="margin:0; font-size:12px; line-height:1.45; white-space:pre-line;">
                { shown }
                { if truncatable {
                    html! {
                        <button
                            onclick={toggle}
                            style="background:none; border:none; color:#58a6ff; padding:0 0 0 4px; font-size:12px; cursor:pointer;"
                        >{ if props.expanded { "Less" } else { "More" } }</button>
                    }
                } else {
                    html! {}
                } }
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_never_truncated() {
        let (shown, truncatable) = display_description("short blurb", false);
        assert_eq!(shown, "short blurb");
        assert!(!truncatable);
    }

    #[test]
    fn long_text_collapses_to_the_threshold_and_expands_in_full() {
        let text = "x".repeat(200);
        let (shown, truncatable) = display_description(&text, false);
        assert!(truncatable);
        assert_eq!(shown.chars().count(), 128 + 3);
        assert!(shown.ends_with("..."));

        let (shown, _) = display_description(&text, true);
        assert_eq!(shown, text);
    }
}
