use std::collections::HashSet;

use super::*;

fn find(id: &str) -> Option<&'static SkillRecord> {
    SKILLS.iter().find(|skill| skill.id == id)
}

#[test]
fn skill_ids_are_unique() {
    let ids = SKILLS.iter().map(|s| s.id).collect::<HashSet<_>>();
    assert_eq!(ids.len(), SKILLS.len());
}

#[test]
fn skill_percentages_are_in_range() {
    assert!(SKILLS.iter().all(|s| s.percent <= 100));
}

#[test]
fn skills_keep_display_order() {
    let ids = SKILLS.iter().map(|s| s.id).collect::<Vec<_>>();
    assert_eq!(ids, ["industrial-systems", "ml-data", "cloud", "embedded", "plc", "python"]);
}

#[test]
fn aria_label_names_the_skill() {
    let skill = find("plc").map(SkillRecord::aria_label);
    assert_eq!(skill.as_deref(), Some("PLC & SCADA proficiency"));
}

#[test]
fn bar_style_uses_target_width() {
    let style = find("industrial-systems").map(SkillRecord::bar_style);
    assert_eq!(style.as_deref(), Some("width: 90%"));
}

#[test]
fn find_unknown_id_is_none() {
    assert!(find("cobol").is_none());
}
