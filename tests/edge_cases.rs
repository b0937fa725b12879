use citylight_lib::model::city::{City, CityError};
use citylight_lib::model::config::AppConfig;

/// Invariant tests for the spatial stamps, the biased-sample fallbacks, and
/// construction failure.

fn quiet_config(seed: u64) -> AppConfig {
    // Zero capacity keeps walkers out of the way so stamps can be observed
    // on an otherwise static grid.
    let mut config = AppConfig::default();
    config.world.width = 64;
    config.world.height = 64;
    config.world.seed = Some(seed);
    config.agents.max_agents = 0;
    config
}

#[test]
fn test_construction_rejects_degenerate_dimensions() {
    let mut config = AppConfig::default();
    config.world.width = 4;
    config.world.height = 100;
    assert!(matches!(
        City::new(config),
        Err(CityError::GridTooSmall(4, 100))
    ));
}

#[test]
fn test_bloom_center_gets_full_strength() {
    let mut city = City::new(quiet_config(1)).unwrap();
    city.grid.clear();

    city.bloom(30, 30, 5, 100);
    assert_eq!(city.get(30, 30), 100, "center receives full strength");
}

#[test]
fn test_bloom_falloff_is_quadratic() {
    let mut city = City::new(quiet_config(2)).unwrap();
    city.grid.clear();

    city.bloom(30, 30, 5, 100);
    // Squared distance 1 -> 100 - 3, squared distance 4 -> 100 - 12.
    assert_eq!(city.get(31, 30), 97);
    assert_eq!(city.get(32, 30), 88);
    assert_eq!(city.get(31, 31), 94, "diagonal uses squared distance 2");
}

#[test]
fn test_bloom_footprint_is_circular() {
    let mut city = City::new(quiet_config(3)).unwrap();
    city.grid.clear();

    city.bloom(30, 30, 5, 100);
    // The square corner of the offset loop lies outside radius^2.
    assert_eq!(city.get(35, 35), 0, "corner beyond the radius is untouched");
    assert_eq!(city.get(30, 36), 0, "just past the radius is untouched");
}

#[test]
fn test_bloom_near_edge_skips_border() {
    let mut city = City::new(quiet_config(4)).unwrap();
    city.grid.clear();

    city.bloom(2, 2, 6, 200);
    for x in 0..city.width() {
        assert_eq!(city.get(x, 0), 0);
    }
    for y in 0..city.height() {
        assert_eq!(city.get(0, y), 0);
    }
    assert!(city.get(2, 2) > 0, "interior cells near the edge still lit");
}

#[test]
fn test_bloom_saturates_when_stacked() {
    let mut city = City::new(quiet_config(5)).unwrap();
    city.grid.clear();

    for _ in 0..10 {
        city.bloom(30, 30, 4, 120);
    }
    assert_eq!(city.get(30, 30), 255, "stacked blooms clamp at 255");
}

#[test]
fn test_bright_node_on_dark_grid_falls_back_to_seed() {
    let mut city = City::new(quiet_config(6)).unwrap();
    city.grid.clear();

    city.place_bright_node();
    let (sx, sy) = city.seed_point();
    // Core (220) plus halo (90) saturate the fallback point.
    assert_eq!(city.get(sx as u16, sy as u16), 255);
    assert_eq!(city.get(2, 2), 0, "far corner stays dark");
}

#[test]
fn test_respawn_on_dark_grid_falls_back_to_seed() {
    let mut config = AppConfig::default();
    config.world.seed = Some(8);
    let mut city = City::new(config).unwrap();
    city.grid.clear();

    city.respawn_slot(0);
    let agent = city.agents.get(0);
    let (sx, sy) = city.seed_point();
    assert_eq!((agent.x, agent.y), (sx, sy), "no lit candidate -> seed point");
    assert!(agent.life >= 200, "revived with a long life");
    assert_eq!(
        (agent.dx as i16 * agent.dy as i16, agent.dx.abs() + agent.dy.abs()),
        (0, 1),
        "direction is a single axis unit vector"
    );
}

#[test]
fn test_respawn_skips_saturated_downtown() {
    let mut config = AppConfig::default();
    config.world.seed = Some(9);
    let mut city = City::new(config).unwrap();

    // Saturate every cell: nothing qualifies as "lit but not saturated".
    for y in 0..city.height() {
        for x in 0..city.width() {
            city.grid.add(x, y, 255);
        }
    }
    city.respawn_slot(0);
    let agent = city.agents.get(0);
    assert_eq!(
        (agent.x, agent.y),
        city.seed_point(),
        "fully saturated map -> seed point fallback"
    );
}
