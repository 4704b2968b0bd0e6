use lesson_core::model::{LessonId, MovieId, ProgressKey, ProgressMap};

use super::test_harness::setup_view_harness;
use crate::vm::Tab;

fn zootopia(lesson: u32, index: usize) -> ProgressKey {
    ProgressKey::new(MovieId::new("zootopia"), LessonId::new(lesson), index)
}

#[test]
fn study_view_smoke_renders_first_lesson() {
    let harness = setup_view_harness(ProgressMap::new(), |_, _| {});
    let html = harness.render();

    assert!(html.contains("Movie English"), "missing title in {html}");
    assert!(html.contains("중년 여성을 위한 매일 10분 영어"), "missing subtitle in {html}");
    assert!(html.contains("Day 1"), "missing lesson chip in {html}");
    assert!(html.contains("Day 2"), "missing lesson chip in {html}");
    assert!(html.contains("Mission accomplished."), "missing dialogue in {html}");
    assert!(html.contains("0/3 낭독 완료"), "missing progress in {html}");
    assert!(html.contains("font-size: 1.4rem"), "missing font style in {html}");
}

#[test]
fn study_view_smoke_counts_finished_lines_of_selected_movie() {
    let mut progress = ProgressMap::new();
    progress.toggle(zootopia(1, 0));
    progress.toggle(zootopia(1, 2));
    progress.toggle(zootopia(2, 0));

    let harness = setup_view_harness(progress, |controller, content| {
        controller.select_movie(MovieId::new("zootopia"), content);
    });
    let html = harness.render();

    assert!(html.contains("Chief Bogo"), "missing character in {html}");
    assert!(html.contains("You are my favorite deputy."), "missing dialogue in {html}");
    assert!(html.contains("2/3 낭독 완료"), "missing progress in {html}");
}

#[test]
fn review_view_smoke_lists_learned_words() {
    let mut progress = ProgressMap::new();
    progress.toggle(zootopia(1, 0));
    progress.toggle(zootopia(1, 1));

    let harness = setup_view_harness(progress, |controller, _| controller.set_tab(Tab::Review));
    let html = harness.render();

    assert!(html.contains("내 단어장"), "missing heading in {html}");
    assert!(html.contains("Deputy"), "missing word in {html}");
    assert!(html.contains("대리인, 부관"), "missing meaning in {html}");
    assert!(html.contains("You are my favorite deputy."), "missing sentence in {html}");
    assert!(html.contains("시도하다"), "missing second word in {html}");
    assert!(!html.contains("Mission"), "unfinished word leaked into {html}");
}

#[test]
fn review_view_smoke_renders_hint_when_empty() {
    let harness = setup_view_harness(ProgressMap::new(), |controller, _| {
        controller.set_tab(Tab::Review);
    });
    let html = harness.render();

    assert!(html.contains("학습 중 체크한 단어가 여기에 저장됩니다."), "missing hint in {html}");
    assert!(!html.contains("vocabulary-word"), "unexpected word card in {html}");
}

#[test]
fn settings_view_smoke_renders_sliders_and_reset() {
    let harness = setup_view_harness(ProgressMap::new(), |controller, _| {
        controller.set_tab(Tab::Settings);
        controller.set_speech_rate(1.2);
    });
    let html = harness.render();

    assert!(html.contains("글자 크기 조정"), "missing font label in {html}");
    assert!(html.contains("settings-speech-rate"), "missing rate slider in {html}");
    assert!(html.contains("1.2"), "missing rate value in {html}");
    assert!(html.contains("초기화하기"), "missing reset in {html}");
    assert!(html.contains("학습 환경 설정"), "missing subtitle in {html}");
}

#[test]
fn checking_lines_updates_progress_and_reset_clears_it() {
    let mut harness = setup_view_harness(ProgressMap::new(), |controller, content| {
        controller.select_movie(MovieId::new("zootopia"), content);
    });
    let zootopia_id = MovieId::new("zootopia");
    assert!(harness.render().contains("0/3 낭독 완료"));

    harness.toggle_line(1, 0);
    assert!(harness.progress.is_finished(&zootopia_id, LessonId::new(1), 0));
    let html = harness.render();
    assert!(html.contains("1/3 낭독 완료"), "checkbox did not update progress in {html}");

    harness.toggle_line(1, 0);
    assert!(!harness.progress.is_finished(&zootopia_id, LessonId::new(1), 0));
    assert!(harness.render().contains("0/3 낭독 완료"));

    harness.toggle_line(1, 1);
    harness.toggle_line(1, 2);
    assert!(harness.render().contains("2/3 낭독 완료"));

    harness.reset_progress();
    assert!(harness.progress.get().is_empty());
    let html = harness.render();
    assert!(html.contains("0/3 낭독 완료"), "reset did not clear progress in {html}");
}
