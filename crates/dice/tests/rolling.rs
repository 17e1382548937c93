use std::collections::HashSet;

use emotiondice_dice::{DiceSettings, EmotionDice, ImagePlan};
use emotiondice_taxonomy::builtin_taxonomy;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn rolls_on_the_builtin_wheel_always_carry_full_ancestry() {
    let taxonomy = builtin_taxonomy().expect("bundled wheel");
    let mut dice = EmotionDice::new(taxonomy, &DiceSettings::default());
    assert_eq!(dice.pool().len(), 82);

    let mut rng = StdRng::seed_from_u64(2024);
    let mut seen = HashSet::new();
    for _ in 0..500 {
        let state = dice.roll_with(&mut rng).expect("roll");
        let emotion = state.emotion.clone().expect("emotion");
        assert!(state.parent.is_some(), "{emotion} has a parent");
        assert!(state.grandparent.is_some(), "{emotion} has a grandparent");
        let image = state.image_path.as_deref().expect("image path");
        assert!(image.starts_with("/images/feelings/"));
        assert!(image.ends_with(".jpg"));
        assert!(!image.contains(' '));
        seen.insert(emotion);
    }
    // 82 leaves but a handful of names repeat across branches.
    assert!(seen.len() > 60);
}

#[test]
fn image_plan_covers_every_leaf() {
    let taxonomy = builtin_taxonomy().expect("bundled wheel");
    let settings = DiceSettings::default();
    let plan = ImagePlan::for_taxonomy(&taxonomy, &settings.prompts, &settings.images.format());
    assert_eq!(plan.entries.len(), taxonomy.leaf_count());
    let first = &plan.entries[0];
    assert_eq!(first.path.to_string(), "Feelings > Happy > Playful > Aroused");
    assert_eq!(first.relative_file, "feelings/happy/playful/aroused.jpg");
    assert!(first.prompt.contains("'Playful, Aroused'"));
}
