use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use lesson_core::model::{ContentStore, LessonId, ProgressMap};
use services::ProgressStore;
use storage::bundled_content;

use crate::context::{UiApp, build_app_context};
use crate::views::settings::use_reset_progress;
use crate::views::study::use_toggle_line;
use crate::views::{Shell, use_ui_state_with};
use crate::vm::ViewController;

struct TestApp {
    content: Arc<ContentStore>,
    progress: Arc<ProgressStore>,
}

impl UiApp for TestApp {
    fn content(&self) -> Arc<ContentStore> {
        Arc::clone(&self.content)
    }

    fn progress(&self) -> Arc<ProgressStore> {
        Arc::clone(&self.progress)
    }
}

/// Callbacks captured from inside the harness so tests can fire them.
#[derive(Clone, Default)]
struct ViewHandles {
    toggle_line: Rc<RefCell<Option<Callback<(LessonId, usize)>>>>,
    reset_progress: Rc<RefCell<Option<Callback<()>>>>,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    controller: ViewController,
    handles: ViewHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ShellHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    let initial = props.controller.clone();
    use_ui_state_with(&ctx, move || initial);

    let toggle_line = use_toggle_line();
    let reset_progress = use_reset_progress();
    *props.handles.toggle_line.borrow_mut() = Some(toggle_line);
    *props.handles.reset_progress.borrow_mut() = Some(reset_progress);

    rsx! { Shell {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub progress: Arc<ProgressStore>,
    handles: ViewHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Check or uncheck a line of the selected movie, as the card checkbox does.
    pub fn toggle_line(&mut self, lesson: u32, index: usize) {
        let toggle = self
            .handles
            .toggle_line
            .borrow()
            .expect("toggle handler registered");
        self.dom
            .in_runtime(|| toggle.call((LessonId::new(lesson), index)));
        drive_dom(&mut self.dom);
    }

    /// Press the settings reset button.
    pub fn reset_progress(&mut self) {
        let reset = self
            .handles
            .reset_progress
            .borrow()
            .expect("reset handler registered");
        self.dom.in_runtime(|| reset.call(()));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

/// Build a shell over the bundled content with `progress` preloaded.
///
/// `configure` adjusts the starting controller (tab, movie, lesson).
pub fn setup_view_harness(
    progress: ProgressMap,
    configure: impl FnOnce(&mut ViewController, &ContentStore),
) -> ViewHarness {
    let content = Arc::new(bundled_content().expect("bundled content"));
    let progress = Arc::new(ProgressStore::new(progress));
    let mut controller = ViewController::new(&content);
    configure(&mut controller, &content);

    let app = Arc::new(TestApp {
        content,
        progress: Arc::clone(&progress),
    });
    let handles = ViewHandles::default();
    let dom = VirtualDom::new_with_props(
        ShellHarness,
        ViewHarnessProps {
            app,
            controller,
            handles: handles.clone(),
        },
    );
    let mut harness = ViewHarness {
        dom,
        progress,
        handles,
    };
    harness.rebuild();
    harness
}

fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}
