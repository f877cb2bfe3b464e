use fn_table_stories::data::{create_people_list, heroes};
use fn_table_stories::stories;
use fn_table_stories::write_stories;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_create_people_list_size_and_ages() {
    let mut rng = StdRng::seed_from_u64(7);
    let people = create_people_list(200, &mut rng);
    assert_eq!(people.len(), 200);
    assert!(people.iter().all(|p| (5..=99).contains(&p.age)));
    assert!(people.iter().all(|p| !p.first_name.is_empty() && !p.last_name.is_empty()));
}

#[test]
fn test_create_people_list_is_seeded() {
    let a = create_people_list(10, &mut StdRng::seed_from_u64(42));
    let b = create_people_list(10, &mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
    assert!(create_people_list(0, &mut StdRng::seed_from_u64(42)).is_empty());
}

#[test]
fn test_every_story_renders_a_table() {
    for story in stories::all() {
        let table = (story.render)().unwrap_or_else(|e| panic!("{}: {e}", story.name));
        assert_eq!(table.tag, "table", "{}", story.name);
        let page = stories::document(&story, &table);
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<table"), "{}", story.name);
    }
}

#[test]
fn test_story_names_are_unique() {
    let all = stories::all();
    let mut names: Vec<_> = all.iter().map(|s| s.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), all.len());
}

#[test]
fn test_multiple_selection_story_selects_second_row() {
    let story = stories::all()
        .into_iter()
        .find(|s| s.name == "multiple-selection")
        .unwrap();
    let table = (story.render)().unwrap();
    let rows = table.find_all("tbody")[0].find_all("tr");
    assert_eq!(rows[0].get_attr("data-selected"), Some("false"));
    assert_eq!(rows[1].get_attr("data-selected"), Some("true"));
    assert_eq!(rows[1].get_attr("data-row-id"), Some("She"));

    let header = table.find_all("thead")[0].find_all("input")[0];
    assert!(header.indeterminate);
    assert!(!header.checked);
}

#[test]
fn test_single_selection_story_keeps_last_click() {
    let story = stories::all()
        .into_iter()
        .find(|s| s.name == "single-selection")
        .unwrap();
    let table = (story.render)().unwrap();
    let selected: Vec<_> = table
        .find_all("tr")
        .into_iter()
        .filter(|tr| tr.get_attr("data-selected") == Some("true"))
        .map(|tr| tr.get_attr("data-row-id").unwrap().to_string())
        .collect();
    assert_eq!(selected, vec!["1".to_string()]);
}

#[test]
fn test_footer_story_sums_ages() {
    let story = stories::all().into_iter().find(|s| s.name == "footer").unwrap();
    let table = (story.render)().unwrap();
    let total: i64 = heroes().iter().map(|p| i64::from(p.age)).sum();
    let foot = table.find_all("tfoot");
    assert_eq!(foot.len(), 1);
    assert!(foot[0].text_content().contains(&total.to_string()));
}

#[test]
fn test_write_stories_writes_pages_and_index() {
    let dir = std::env::temp_dir().join(format!("fn-table-stories-{}", std::process::id()));
    let written = write_stories(&dir).unwrap();
    assert_eq!(written.len(), stories::all().len() + 1);
    for path in &written {
        assert!(path.exists(), "{}", path.display());
    }
    let index = std::fs::read_to_string(dir.join("index.html")).unwrap();
    assert!(index.contains("href=\"default.html\""));
    std::fs::remove_dir_all(&dir).unwrap();
}
