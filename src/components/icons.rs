use dioxus::prelude::*;

#[component]
pub fn Icon(name: String, class: String) -> Element {
    let svg_content = match name.as_str() {
        "play" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                polygon { points: "6 3 20 12 6 21 6 3" }
            }
        },
        "pause" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                rect { x: "5", y: "4", width: "4", height: "16", rx: "1" }
                rect { x: "15", y: "4", width: "4", height: "16", rx: "1" }
            }
        },
        "volume" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                polygon { points: "11 5 6 9 2 9 2 15 6 15 11 19 11 5" }
                path { d: "M15.54 8.46a5 5 0 0 1 0 7.07" }
                path { d: "M19.07 4.93a10 10 0 0 1 0 14.14" }
            }
        },
        "volume-mute" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                polygon { points: "11 5 6 9 2 9 2 15 6 15 11 19 11 5" }
                line { x1: "23", y1: "9", x2: "17", y2: "15" }
                line { x1: "17", y1: "9", x2: "23", y2: "15" }
            }
        },
        "gauge" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                path { d: "M12 14l4-4" }
                path { d: "M3.34 19a10 10 0 1 1 17.32 0z" }
            }
        },
        "rss" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                path { d: "M4 11a9 9 0 0 1 9 9" }
                path { d: "M4 4a16 16 0 0 1 16 16" }
                circle { cx: "5", cy: "19", r: "1" }
            }
        },
        "mic" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                rect { x: "9", y: "2", width: "6", height: "12", rx: "3" }
                path { d: "M5 10v1a7 7 0 0 0 14 0v-1" }
                line { x1: "12", y1: "18", x2: "12", y2: "22" }
            }
        },
        "keyboard" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                rect {
                    x: "2",
                    y: "6",
                    width: "20",
                    height: "12",
                    rx: "2",
                }
                path { d: "M6 10h.01M10 10h.01M14 10h.01M18 10h.01M8 14h8" }
            }
        },
        "arrow-left" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                line { x1: "19", y1: "12", x2: "5", y2: "12" }
                polyline { points: "12 19 5 12 12 5" }
            }
        },
        "spinner" => rsx! {
            svg {
                class: "{class} animate-spin",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                path { d: "M21 12a9 9 0 1 1-6.22-8.56" }
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
