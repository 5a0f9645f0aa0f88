use ripple_engine::{EffectCore, EffectSettings};

#[test]
fn settings_smoke_host_panel_json() {
    // The shape the host property panel sends.
    let json = r#"{
        "gap": 30,
        "pointer_radius": 2000.0,
        "ripple_strength": 10.0,
        "explosion_radius": 150.0
    }"#;

    let settings = EffectSettings::from_json(json).expect("panel JSON should parse");
    assert_eq!(settings.gap, 30);
    assert_eq!(settings.pointer_radius, 2000.0);
    // Unspecified fields keep their defaults.
    assert_eq!(settings.ease, 0.03);
    assert_eq!(settings.friction, 0.98);

    let mut effect = EffectCore::with_defaults(300, 300).unwrap();
    effect.apply_settings(settings).expect("validated settings should apply");
    assert_eq!(effect.particle_count(), 10 * 10);
    assert_eq!(effect.pointer().radius, 2000.0);

    // What the panel reads back parses to the same values.
    let round_trip = EffectSettings::from_json(&effect.settings().to_json()).unwrap();
    assert_eq!(&round_trip, effect.settings());
}
