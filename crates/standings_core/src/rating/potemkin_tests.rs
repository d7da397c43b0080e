use super::*;
use crate::filter::{Side, TableFilter};
use crate::test_support::{registry_with, report};

#[test]
fn test_pot_split_by_goals() {
    // Stakes 10 + 10, pot 20 split 3:1
    let (home, away) = potemkin_deltas(100.0, 100.0, 3, 1);
    assert!((home - 5.0).abs() < 1e-12);
    assert!((away + 5.0).abs() < 1e-12);
}

#[test]
fn test_goalless_match_splits_evenly() {
    // Stakes 20 + 5, pot 25, half each
    let (strong, weak) = potemkin_deltas(200.0, 50.0, 0, 0);
    assert!((strong + 7.5).abs() < 1e-12);
    assert!((weak - 7.5).abs() < 1e-12);
}

#[test]
fn test_single_match_conserves_mass() {
    let mut registry = registry_with(&["Home", "Away"]);
    registry.team_mut(0).potemkin_rating = 140.0;
    registry.team_mut(1).potemkin_rating = 85.0;
    registry.add_match(&report(1, "Home", "Away", 1, 4));
    TableFilter::new(Side::Home, None).apply(&mut registry);

    let before = registry.team(0).potemkin_rating + registry.team(1).potemkin_rating;
    let population = registry.filtered_population();
    calculate_potemkin(&mut registry, &population);
    let after = registry.team(0).potemkin_rating + registry.team(1).potemkin_rating;

    assert!((before - after).abs() < 1e-9);
    assert!(registry.team(1).potemkin_rating > 85.0);
}

#[test]
fn test_general_view_settles_match_from_both_sides() {
    let mut registry = registry_with(&["Home", "Away"]);
    registry.add_match(&report(1, "Home", "Away", 2, 0));
    TableFilter::GENERAL.apply(&mut registry);
    let population = registry.filtered_population();
    calculate_potemkin(&mut registry, &population);

    // Home's pass: 100/100 -> 110/90. Away's pass: stakes 9 + 11, all to Home.
    assert!((registry.team(0).potemkin_rating - 119.0).abs() < 1e-9);
    assert!((registry.team(1).potemkin_rating - 81.0).abs() < 1e-9);
}
