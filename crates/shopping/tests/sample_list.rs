use mealdraft_catalog::sample_meals;
use mealdraft_shopping::aggregate;

#[test]
fn sample_catalog_produces_a_merged_list() {
    let meals = sample_meals();
    let list = aggregate(&meals);

    // Both sample meals contribute "2 garlic cloves"-style lines; the onion
    // lines differ ("1 onion, chopped" vs "1 onion") and stay separate.
    let onion_entries = list.iter().filter(|e| e.name.contains("onion")).count();
    assert_eq!(onion_entries, 2);

    let names: Vec<_> = list.iter().map(|e| e.name.clone()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);

    for entry in &list {
        let sum: f64 = entry.items.iter().map(|i| i.quantity).sum();
        assert_eq!(entry.quantity, sum);
        assert!(!entry.items.is_empty());
    }
}

#[test]
fn garlic_lines_with_different_suffixes_do_not_merge() {
    let meals = sample_meals();
    let list = aggregate(&meals);

    // "2 garlic cloves, crushed" and "2 garlic cloves" parse to different
    // names, so each keeps its own entry.
    let garlic: Vec<_> = list.iter().filter(|e| e.name.contains("garlic")).collect();
    assert_eq!(garlic.len(), 2);
    for entry in &garlic {
        assert_eq!(entry.quantity, 2.0);
    }
}
