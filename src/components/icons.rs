use dioxus::prelude::*;

#[component]
pub fn Icon(name: String, class: String) -> Element {
    let svg_content = match name.as_str() {
        "play" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                "aria-hidden": "true",
                path { d: "M8 5v14l11-7z" }
            }
        },
        "pause" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                "aria-hidden": "true",
                rect {
                    x: "6",
                    y: "5",
                    width: "4",
                    height: "14",
                }
                rect {
                    x: "14",
                    y: "5",
                    width: "4",
                    height: "14",
                }
            }
        },
        "prev" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                "aria-hidden": "true",
                path { d: "M11.5 12L18 17.5V6.5L11.5 12zM5 17.5V6.5L11.5 12 5 17.5z" }
            }
        },
        "next" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                "aria-hidden": "true",
                path { d: "M12.5 12L6 17.5V6.5L12.5 12zM18 17.5V6.5L12.5 12 18 17.5z" }
            }
        },
        "volume" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                "aria-hidden": "true",
                path { d: "M3 10v4h4l5 5V5L7 10H3z" }
                path {
                    d: "M16.5 8.5a4.5 4.5 0 010 7",
                    stroke: "currentColor",
                    stroke_width: "1",
                    fill: "none",
                }
                path {
                    d: "M19 6a7 7 0 010 12",
                    stroke: "currentColor",
                    stroke_width: "1",
                    fill: "none",
                }
            }
        },
        "volume-mute" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                "aria-hidden": "true",
                path { d: "M3 10v4h4l5 5V5L7 10H3z" }
                path {
                    d: "M16 9l6 6M22 9l-6 6",
                    stroke: "currentColor",
                    stroke_width: "1.5",
                    fill: "none",
                }
            }
        },
        _ => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle { cx: "12", cy: "12", r: "10" }
            }
        },
    };

    svg_content
}
