use super::*;

#[test]
fn percent_parses_from_strings() {
    let p: Percent = "50%".parse().unwrap();
    assert_eq!(p, Percent(50.0));
    assert_eq!(p.fraction(), 0.5);
    assert!(!p.is_negative());

    let p: Percent = "-25%".parse().unwrap();
    assert_eq!(p, Percent(-25.0));
    assert!(p.is_negative());

    assert_eq!(Percent(12.5).to_string(), "12.5%");
}

#[test]
fn percent_rejects_malformed_strings() {
    assert!("50".parse::<Percent>().is_err());
    assert!("abc%".parse::<Percent>().is_err());
    assert!("inf%".parse::<Percent>().is_err());
}

#[test]
fn viewport_extent_follows_axis() {
    let vp = Viewport::new(800.0, 600.0);
    assert_eq!(vp.extent(Axis::X), 800.0);
    assert_eq!(vp.extent(Axis::Y), 600.0);
}

#[test]
fn color_coerces_and_clamps_channels() {
    let c = Color::new(127.6, -3.0, 300.0, 1.5);
    assert_eq!(c.r, 128);
    assert_eq!(c.g, 0);
    assert_eq!(c.b, 255);
    assert_eq!(c.a, 1.0);

    assert_eq!(Color::rgb(10.0, 20.0, 30.0).a, 1.0);
    assert_eq!(c.to_string(), "rgba(128, 0, 255, 1)");
}

#[test]
fn color_channel_roundtrip_clamps_overshoot() {
    let c = Color::rgb(0.0, 128.0, 255.0);
    assert_eq!(Color::from_channels(c.channels()), c);

    // Easing overshoot past the channel range is clamped on reassembly.
    let c = Color::from_channels([-20.0, 260.0, 128.0, -0.2]);
    assert_eq!((c.r, c.g, c.b, c.a), (0, 255, 128, 0.0));
}
