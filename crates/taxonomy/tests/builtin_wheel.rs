use emotiondice_taxonomy::{builtin_taxonomy, format_resource_path, ResourcePathFormat};

#[test]
fn multi_word_leaf_maps_to_hyphenated_image() {
    let taxonomy = builtin_taxonomy().expect("bundled wheel");
    let path = taxonomy.resolve_path("Out of Control").expect("leaf");
    assert_eq!(path.to_string(), "Feelings > Bad > Stressed > Out of Control");
    assert_eq!(
        format_resource_path(&path),
        "/images/feelings/bad/stressed/out-of-control.jpg"
    );
}

#[test]
fn duplicated_leaf_resolves_to_first_branch() {
    let taxonomy = builtin_taxonomy().expect("bundled wheel");

    // "Embarrassed" sits under Sad > Hurt and under Disgusted > Disapproving.
    let path = taxonomy.resolve_path("Embarrassed").expect("leaf");
    assert_eq!(path.segments(), ["Feelings", "Sad", "Hurt", "Embarrassed"]);

    let occurrences = taxonomy
        .flatten()
        .into_iter()
        .filter(|name| name == "Embarrassed")
        .count();
    assert_eq!(occurrences, 2);
}

#[test]
fn category_named_like_a_leaf_is_never_selected() {
    let taxonomy = builtin_taxonomy().expect("bundled wheel");

    // "Disappointed" is a category under Disgusted and a leaf under Sad > Hurt.
    let path = taxonomy.resolve_path("Disappointed").expect("leaf");
    assert_eq!(path.parent(), Some("Hurt"));
    assert!(taxonomy.resolve_path("Disgusted").is_none());
    assert!(taxonomy.resolve_path("Feelings").is_none());
}

#[test]
fn image_plan_paths_are_unique_per_leaf() {
    let taxonomy = builtin_taxonomy().expect("bundled wheel");
    let format = ResourcePathFormat::new("images", "png");
    let mut relatives: Vec<String> = taxonomy
        .leaf_paths()
        .iter()
        .map(|path| format.relative(path))
        .collect();
    let total = relatives.len();
    relatives.sort();
    relatives.dedup();
    assert_eq!(relatives.len(), total);
    assert!(relatives.contains(&"feelings/angry/let-down/betrayed.png".to_string()));
}
