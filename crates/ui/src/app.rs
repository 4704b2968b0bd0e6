use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{Shell, use_ui_state};

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    use_ui_state(&ctx);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Movie English" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Shell {}
            }
        }
    }
}
