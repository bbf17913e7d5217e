use rocket_boost::core::config::config::GameConfig;
use rocket_boost::gameplay::flight::ports::Control;
use rocket_boost::gameplay::flight::{CuePaths, FlightTuning};
use rocket_boost::interaction::inputmap::parse::parse_input_toml;

const CONTROLS: [Control; 5] = [
    Control::Boost,
    Control::RotateLeft,
    Control::RotateRight,
    Control::ToggleCollisions,
    Control::SkipLevel,
];

#[test]
fn shipped_input_map_binds_every_control() {
    let raw = std::fs::read_to_string("assets/config/input.toml").expect("input.toml present");
    let parsed = parse_input_toml(&raw, true);
    assert!(parsed.errors.is_empty(), "unexpected errors: {:?}", parsed.errors);
    for c in CONTROLS {
        assert!(
            parsed.input_map.bindings_for(c.action_name()).count() > 0,
            "no binding for {:?}",
            c
        );
    }
    assert_eq!(parsed.input_map.bindings_for("Boost").count(), 2, "Space + W");
}

#[test]
fn release_build_layer_hides_debug_controls() {
    let raw = std::fs::read_to_string("assets/config/input.toml").expect("input.toml present");
    let parsed = parse_input_toml(&raw, false);
    assert!(parsed.errors.is_empty(), "{:?}", parsed.errors);
    assert_eq!(parsed.input_map.bindings_for("SkipLevel").count(), 0);
    assert_eq!(parsed.input_map.bindings_for("ToggleCollisions").count(), 0);
    assert!(parsed.input_map.bindings_for("RotateLeft").count() > 0);
}

#[test]
fn shipped_game_config_is_the_default_and_valid() {
    let cfg = GameConfig::load_from_file("assets/config/game.ron").expect("game.ron parses");
    assert_eq!(cfg, GameConfig::default());
    assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
    let r = &cfg.rocket;
    assert!(FlightTuning::new(r.rotate_speed, r.boost_speed, r.level_load_delay).is_ok());
    assert!(CuePaths::from_config(&cfg.cues).is_ok());
}
