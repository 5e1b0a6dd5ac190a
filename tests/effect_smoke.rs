use rainbow_sand_engine::config::EffectConfig;
use rainbow_sand_engine::Effect;

#[test]
fn facade_drives_a_full_pour() {
    let mut effect = Effect::new("hand_sand").unwrap();
    assert_eq!((effect.cols(), effect.rows()), (80, 60));
    assert!(effect.debug_view());

    // One closed pinch per frame, 20ms apart so the rate limit never bites
    for frame in 0..100u32 {
        effect.push_pinch(0, 0.5, 0.125, 0.5, 0.125);
        assert!(effect.step(frame as f64 * 20.0));
    }

    assert_eq!(effect.frame(), 100);
    assert_eq!(effect.particle_count(), 100);
    assert_eq!(effect.frame_len(), 800 * 600);
    assert_eq!(effect.frame_byte_len(), 800 * 600 * 4);
    assert!(!effect.frame_ptr().is_null());

    // The pile sits on the floor under column 40
    assert_ne!(effect.cell_color(40, 59), -1);
    assert_eq!(effect.cell_color(-1, 0), -1);
    assert_eq!(effect.cell_color(0, 0), -1);
}

#[test]
fn hud_is_readable_through_the_facade() {
    let mut effect = Effect::new("hand_sand").unwrap();
    effect.push_pinch(0, 0.5, 0.5, 0.5, 0.5);
    effect.step(0.0);

    assert_eq!(effect.hud_line_count(), 6);
    assert_eq!(effect.hud_line_text(0), "Pinch Distance: 0.000");
    assert_eq!((effect.hud_line_x(0), effect.hud_line_y(0)), (10, 10));
    assert_eq!(effect.hud_line_size(0), 36);
    assert_eq!(effect.hud_line_color(1), 0x00FF00);
    assert_eq!(effect.hud_line_text(99), "");

    assert!(effect.handle_key("v"));
    effect.step(16.0);
    assert!(!effect.debug_view());
    assert_eq!(effect.hud_line_count(), 1);
}

#[test]
fn native_hosts_can_pass_a_config() {
    let mut config = EffectConfig::mouth_rainbow();
    config.cols = 40;
    config.rows = 30;
    let effect = Effect::with_config(config).unwrap();
    assert_eq!(effect.cell_size(), 20);
    assert!(!effect.debug_view());

    assert!(Effect::with_config(EffectConfig { cols: 0, ..EffectConfig::default() }).is_err());
}

#[test]
fn keys_map_to_commands() {
    let mut effect = Effect::new("mouth_rainbow").unwrap();
    effect.push_debug_landmarks(&[0.1, 0.1, 0.2, 0.2, 0.3]);
    assert!(effect.handle_key(" "));
    assert!(effect.step(0.0));
    assert!(effect.paused());

    assert!(effect.handle_key("Escape"));
    assert!(!effect.step(16.0));
    assert!(!effect.running());
}
