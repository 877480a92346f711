use super::*;
use crate::submit::SubmissionState;

#[test]
fn skill_bar_parses_plain_and_percent_values() {
    assert_eq!(SkillBar::from_attr("rust", Some("90")).progress, 90.0);
    assert_eq!(SkillBar::from_attr("rust", Some(" 72.5% ")).progress, 72.5);
}

#[test]
fn skill_bar_clamps_out_of_range() {
    assert_eq!(SkillBar::from_attr("a", Some("140")).progress, 100.0);
    assert_eq!(SkillBar::from_attr("a", Some("-5")).progress, 0.0);
}

#[test]
fn skill_bar_missing_or_bad_attr_is_zero() {
    assert_eq!(SkillBar::from_attr("a", None).progress, 0.0);
    assert_eq!(SkillBar::from_attr("a", Some("lots")).progress, 0.0);
    assert_eq!(SkillBar::from_attr("a", Some("NaN")).progress, 0.0);
}

#[test]
fn page_state_starts_idle_light_and_closed() {
    let state = PageState::new(PageElements::default());
    assert_eq!(state.theme, Theme::Light);
    assert!(!state.menu.open);
    assert_eq!(state.submission.state(), SubmissionState::Idle);
    assert!(state.scroll.revealed.is_empty());
    assert_eq!(state.scroll.active_section, None);
}
