//! Property tests for similarity, selection and trend invariants

use guild_build::model::{SimilarityScore, SkillComparisonModel};
use guild_build::table::{LevelScheme, RatingTable, LEVEL_COUNT, NUMBERED_LEVELS};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

const ROLES: [&str; 3] = ["alpha", "beta", "gamma"];
const SKILLS: [&str; 5] = ["s0", "s1", "s2", "s3", "s4"];
const CELLS: usize = ROLES.len() * LEVEL_COUNT * SKILLS.len();

fn build_table(ratings: &[f64]) -> RatingTable {
    let mut roles = Map::new();
    let mut values = ratings.iter();
    for role in ROLES {
        let mut levels = Map::new();
        for level in NUMBERED_LEVELS {
            let mut skills = Map::new();
            for skill in SKILLS {
                skills.insert(skill.to_string(), json!(values.next().copied().unwrap_or(0.0)));
            }
            levels.insert(level.to_string(), Value::Object(skills));
        }
        roles.insert(role.to_string(), Value::Object(levels));
    }
    RatingTable::from_value(&Value::Object(roles), Some(LevelScheme::numbered()), true).unwrap()
}

fn model_with(ratings: &[f64], mask: &[bool]) -> SkillComparisonModel {
    let mut model = SkillComparisonModel::new(build_table(ratings));
    for (skill, keep) in SKILLS.iter().zip(mask) {
        if !keep {
            model.toggle_skill(skill);
        }
    }
    model
}

fn select(model: &mut SkillComparisonModel, role_a: usize, level_a: usize, role_b: usize, level_b: usize) {
    model.set_role_a(ROLES[role_a]).unwrap();
    model.set_level_a(NUMBERED_LEVELS[level_a]).unwrap();
    model.set_role_b(Some(ROLES[role_b])).unwrap();
    model.set_level_b(NUMBERED_LEVELS[level_b]).unwrap();
}

proptest! {
    #[test]
    fn similarity_is_symmetric(
        ratings in prop::collection::vec(0.0f64..=100.0, CELLS),
        mask in prop::collection::vec(any::<bool>(), SKILLS.len()),
        ra in 0usize..ROLES.len(), la in 0usize..LEVEL_COUNT,
        rb in 0usize..ROLES.len(), lb in 0usize..LEVEL_COUNT,
    ) {
        let mut model = model_with(&ratings, &mask);
        select(&mut model, ra, la, rb, lb);
        let forward = model.compute_similarity().unwrap();
        select(&mut model, rb, lb, ra, la);
        let backward = model.compute_similarity().unwrap();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn self_similarity_is_100(
        ratings in prop::collection::vec(0.0f64..=100.0, CELLS),
        mask in prop::collection::vec(any::<bool>(), SKILLS.len()),
        r in 0usize..ROLES.len(), l in 0usize..LEVEL_COUNT,
    ) {
        prop_assume!(mask.iter().any(|m| *m));
        let mut model = model_with(&ratings, &mask);
        select(&mut model, r, l, r, l);
        prop_assert_eq!(model.compute_similarity().unwrap(), SimilarityScore::Score(100.0));
    }

    #[test]
    fn similarity_is_bounded(
        ratings in prop::collection::vec(-50.0f64..=250.0, CELLS),
        mask in prop::collection::vec(any::<bool>(), SKILLS.len()),
        ra in 0usize..ROLES.len(), la in 0usize..LEVEL_COUNT,
        rb in 0usize..ROLES.len(), lb in 0usize..LEVEL_COUNT,
    ) {
        let mut model = model_with(&ratings, &mask);
        select(&mut model, ra, la, rb, lb);
        match model.compute_similarity().unwrap() {
            SimilarityScore::Score(v) => prop_assert!((0.0..=100.0).contains(&v)),
            SimilarityScore::NoSkillsSelected => prop_assert!(mask.iter().all(|m| !m)),
            SimilarityScore::NotApplicable => prop_assert!(false, "role B is set"),
        }
    }

    #[test]
    fn toggle_twice_is_identity(
        mask in prop::collection::vec(any::<bool>(), SKILLS.len()),
        skill in "[a-z0-9]{1,4}",
    ) {
        let ratings = vec![50.0; CELLS];
        let mut model = model_with(&ratings, &mask);
        let before = model.selection().clone();
        model.toggle_skill(&skill);
        model.toggle_skill(&skill);
        prop_assert_eq!(model.selection(), &before);
    }

    #[test]
    fn select_all_is_idempotent(
        mask in prop::collection::vec(any::<bool>(), SKILLS.len()),
    ) {
        let ratings = vec![50.0; CELLS];
        let mut model = model_with(&ratings, &mask);
        model.select_all();
        let once = model.selection().selected_skills.clone();
        model.select_all();
        prop_assert_eq!(&model.selection().selected_skills, &once);
        prop_assert_eq!(once.len(), SKILLS.len());
    }

    #[test]
    fn trend_has_one_point_per_level(
        ratings in prop::collection::vec(0.0f64..=100.0, CELLS),
        mask in prop::collection::vec(any::<bool>(), SKILLS.len()),
        with_b in any::<bool>(),
    ) {
        let mut model = model_with(&ratings, &mask);
        if with_b {
            model.set_role_b(Some(ROLES[1])).unwrap();
        }
        let trend = model.compute_trend_series().unwrap();
        prop_assert_eq!(trend.len(), if with_b { 2 } else { 1 });
        for series in &trend {
            let levels: Vec<&str> = series.points.iter().map(|p| p.level.as_str()).collect();
            prop_assert_eq!(levels, NUMBERED_LEVELS.to_vec());
            for point in &series.points {
                prop_assert_eq!(point.average.is_some(), mask.iter().any(|m| *m));
            }
        }
    }

    #[test]
    fn no_role_b_is_not_applicable(
        ratings in prop::collection::vec(0.0f64..=100.0, CELLS),
        mask in prop::collection::vec(any::<bool>(), SKILLS.len()),
    ) {
        let model = model_with(&ratings, &mask);
        prop_assert_eq!(model.compute_similarity().unwrap(), SimilarityScore::NotApplicable);
    }
}
