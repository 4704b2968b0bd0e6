use dioxus::prelude::*;
use lesson_core::model::MovieId;

use crate::context::AppContext;
use crate::views::{ReviewView, SettingsView, StudyView, UiState};
use crate::vm::{Tab, map_movie_options};

/// Header with the movie selector, the active tab, and the bottom navigation.
#[component]
pub fn Shell() -> Element {
    let ctx = use_context::<AppContext>();
    let UiState { mut controller, .. } = use_context::<UiState>();
    let content = ctx.content();

    let tab = controller.read().tab();
    let movie_id = controller.read().movie_id().clone();
    let options = map_movie_options(&content, &movie_id);

    rsx! {
        div { class: "app-container",
            header {
                div { class: "header-row",
                    h1 { "Movie English" }
                    select {
                        class: "movie-select",
                        value: "{movie_id}",
                        onchange: move |evt: FormEvent| {
                            controller.write().select_movie(MovieId::new(evt.value()), &content);
                        },
                        for option in options {
                            option {
                                key: "{option.id}",
                                value: "{option.id}",
                                selected: option.selected,
                                "{option.label}"
                            }
                        }
                    }
                }
                div { class: "subtitle", "{tab.subtitle()}" }
            }

            match tab {
                Tab::Study => rsx! { StudyView {} },
                Tab::Review => rsx! { ReviewView {} },
                Tab::Settings => rsx! { SettingsView {} },
            }

            nav { class: "bottom-nav",
                for item in Tab::ALL {
                    NavItem {
                        tab: item,
                        active: tab,
                        on_select: move |next: Tab| controller.write().set_tab(next),
                    }
                }
            }
        }
    }
}

#[component]
fn NavItem(tab: Tab, active: Tab, on_select: Callback<Tab>) -> Element {
    rsx! {
        button {
            class: if tab == active { "nav-item active" } else { "nav-item" },
            r#type: "button",
            onclick: move |_| on_select.call(tab),
            NavIcon { tab }
            span { "{tab.label()}" }
        }
    }
}

#[component]
fn NavIcon(tab: Tab) -> Element {
    let path = match tab {
        Tab::Study => {
            "M12 6.253v13m0-13C10.832 5.477 9.246 5 7.5 5S4.168 5.477 3 6.253v13C4.168 18.477 5.754 18 7.5 18s3.332.477 4.5 1.253m0-13C13.168 5.477 14.754 5 16.5 5c1.747 0 3.332.477 4.5 1.253v13C19.832 18.477 18.247 18 16.5 18c-1.746 0-3.332.477-4.5 1.253"
        }
        Tab::Review => {
            "M19 11H5m14 0a2 2 0 012 2v6a2 2 0 01-2 2H5a2 2 0 01-2-2v-6a2 2 0 012-2m14 0V9a2 2 0 00-2-2M5 11V9a2 2 0 012-2m0 0V5a2 2 0 012-2h6a2 2 0 012 2v2M7 7h10"
        }
        Tab::Settings => {
            "M10.325 4.317c.426-1.756 2.924-1.756 3.35 0a1.724 1.724 0 002.573 1.066c1.543-.94 3.31.826 2.37 2.37a1.724 1.724 0 001.065 2.572c1.756.426 1.756 2.924 0 3.35a1.724 1.724 0 00-1.066 2.573c.94 1.543-.826 3.31-2.37 2.37a1.724 1.724 0 00-2.572 1.065c-.426 1.756-2.924 1.756-3.35 0a1.724 1.724 0 00-2.573-1.066c-1.543.94-3.31-.826-2.37-2.37a1.724 1.724 0 00-1.065-2.572c-1.756-.426-1.756-2.924 0-3.35a1.724 1.724 0 001.066-2.573c-.94-1.543.826-3.31 2.37-2.37.996.608 2.296.07 2.572-1.065z"
        }
    };
    rsx! {
        svg {
            class: "nav-icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: path }
        }
    }
}
