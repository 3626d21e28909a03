//! Fixed-size layout spacer.

use leptos::prelude::*;

/// Spacer between stacked elements, sized in pixels.
#[component]
pub fn Spacer(
    /// Edge length in pixels.
    #[prop(default = 12)]
    size: u16,
) -> impl IntoView {
    view! { <span style=spacer_style(size) aria-hidden="true"></span> }
}

fn spacer_style(size: u16) -> String {
    format!(
        "display: block; width: {size}px; min-width: {size}px; \
         height: {size}px; min-height: {size}px;"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacer_style_sets_all_dimensions() {
        let style = spacer_style(12);
        assert!(style.contains("width: 12px"));
        assert!(style.contains("min-width: 12px"));
        assert!(style.contains("height: 12px"));
        assert!(style.contains("min-height: 12px"));
    }
}
