use approx::assert_relative_eq;
use microchart::palette::Palette;
use microchart::render::Color;

#[test]
fn default_palette_matches_the_shared_dashboard_colors() {
    let palette = Palette::default();

    assert_relative_eq!(palette.primary.red, 11.0 / 255.0, epsilon = 1e-12);
    assert_relative_eq!(palette.primary.green, 27.0 / 255.0, epsilon = 1e-12);
    assert_relative_eq!(palette.primary.blue, 59.0 / 255.0, epsilon = 1e-12);
    assert_relative_eq!(palette.primary.alpha, 0.9, epsilon = 1e-12);

    assert_relative_eq!(palette.green.red, 46.0 / 255.0, epsilon = 1e-12);
    assert_relative_eq!(palette.orange.green, 156.0 / 255.0, epsilon = 1e-12);
    assert_relative_eq!(palette.red.blue, 60.0 / 255.0, epsilon = 1e-12);
}

#[test]
fn soft_variants_share_rgb_with_their_base_color() {
    let palette = Palette::default();
    for (base, soft) in [
        (palette.primary, palette.primary_soft),
        (palette.green, palette.green_soft),
        (palette.orange, palette.orange_soft),
        (palette.red, palette.red_soft),
    ] {
        assert_relative_eq!(base.red, soft.red, epsilon = 1e-12);
        assert_relative_eq!(base.green, soft.green, epsilon = 1e-12);
        assert_relative_eq!(base.blue, soft.blue, epsilon = 1e-12);
        assert_relative_eq!(soft.alpha, 0.25, epsilon = 1e-12);
    }
}

#[test]
fn fallback_sequence_is_primary_green_orange_red() {
    let palette = Palette::default();
    let sequence = palette.fallback_sequence();
    assert_eq!(sequence[0], palette.primary);
    assert_eq!(sequence[1], palette.green);
    assert_eq!(sequence[2], palette.orange);
    assert_eq!(sequence[3], palette.red);
}

#[test]
fn segment_colors_truncate_within_the_palette() {
    let palette = Palette::default();
    let colors = palette.segment_colors(2);
    assert_eq!(colors.as_slice(), &[palette.primary, palette.green]);
}

#[test]
fn segment_colors_cycle_beyond_the_palette() {
    let palette = Palette::default();
    let colors = palette.segment_colors(6);
    assert_eq!(
        colors.as_slice(),
        &[
            palette.primary,
            palette.green,
            palette.orange,
            palette.red,
            palette.primary,
            palette.green,
        ]
    );
}

#[test]
fn default_palette_validates() {
    assert!(Palette::default().validate().is_ok());
}

#[test]
fn out_of_range_channel_fails_validation() {
    let mut palette = Palette::default();
    palette.red = Color::rgba(1.2, 0.0, 0.0, 1.0);
    assert!(palette.validate().is_err());
}
