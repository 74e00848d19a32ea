use leptos::prelude::*;

/// Inline SVG icon served from the public assets directory.
#[component]
pub fn Icon(
    /// Icon name (without the .svg extension)
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Predefined icon names.
#[allow(dead_code)]
pub mod icons {
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const BUILDING: &str = "building";
    pub const CHECK: &str = "check";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CHEVRON_UP: &str = "chevron-up";
    pub const LOADER: &str = "loader";
    pub const SPARKLES: &str = "sparkles";
    pub const TARGET: &str = "target";
    pub const TRENDING_UP: &str = "trending-up";
    pub const X: &str = "x";
}
