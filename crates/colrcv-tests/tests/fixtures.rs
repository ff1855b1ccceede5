//! Known-value conversion tests
//!
//! Every bundled fixture is run through `Color::convert` and through the
//! typed `From` impls, and must match to within 0.001 per channel.

use colrcv_core::{Color, ColorModel, ColorSpace, Hsl, Hsv, Lab, Rgb, Xyz};
use colrcv_tests::accuracy::channel_differences;
use colrcv_tests::{ALMOST, load_fixtures};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn assert_close(label: &str, actual: Color, expected: Color) {
    assert_eq!(actual.model(), expected.model(), "{}", label);
    let diff = channel_differences(actual.model(), actual.to_array(), expected.to_array());
    assert!(
        diff.iter().all(|d| *d < ALMOST),
        "{}: got {}, expected {}",
        label,
        actual,
        expected
    );
}

#[test]
fn test_all_fixtures_convert() {
    init_tracing();
    let fixtures = load_fixtures().expect("load fixtures");

    eprintln!("\nRunning {} conversion fixtures", fixtures.len());
    for fixture in &fixtures {
        let actual = fixture.input.convert(fixture.expected.model());
        assert_close(&fixture.name, actual, fixture.expected);
    }
}

/// Route a fixture through the typed `From` impls instead of `convert`
fn convert_typed(input: Color, target: ColorModel) -> Color {
    fn to<S, T>(source: S) -> Color
    where
        S: ColorSpace,
        T: ColorSpace + From<S>,
    {
        T::from(source).into()
    }

    fn from_source<S>(source: S, target: ColorModel) -> Color
    where
        S: ColorSpace,
        Rgb: From<S>,
        Hsv: From<S>,
        Hsl: From<S>,
        Lab: From<S>,
        Xyz: From<S>,
    {
        match target {
            ColorModel::Rgb => to::<S, Rgb>(source),
            ColorModel::Hsv => to::<S, Hsv>(source),
            ColorModel::Hsl => to::<S, Hsl>(source),
            ColorModel::Lab => to::<S, Lab>(source),
            ColorModel::Xyz => to::<S, Xyz>(source),
        }
    }

    match input {
        Color::Rgb(c) => from_source(c, target),
        Color::Hsv(c) => from_source(c, target),
        Color::Hsl(c) => from_source(c, target),
        Color::Lab(c) => from_source(c, target),
        Color::Xyz(c) => from_source(c, target),
    }
}

#[test]
fn test_all_fixtures_through_from_impls() {
    let fixtures = load_fixtures().expect("load fixtures");

    for fixture in &fixtures {
        let actual = convert_typed(fixture.input, fixture.expected.model());
        assert_close(&fixture.name, actual, fixture.expected);
    }
}

#[test]
fn test_every_pair_is_fixtured() {
    let fixtures = load_fixtures().expect("load fixtures");

    for from in ColorModel::ALL {
        for to in ColorModel::ALL {
            if from == to {
                continue;
            }
            assert!(
                fixtures
                    .iter()
                    .any(|f| f.input.model() == from && f.expected.model() == to),
                "missing fixture for {} -> {}",
                from,
                to
            );
        }
    }
}

#[test]
fn test_rgb_clamp_extremes() {
    let low = Rgb::new(-3000.0, 0.0, 0.0).clamp();
    assert_eq!(low, Rgb::new(0.0, 0.0, 0.0));

    let high = Rgb::new(1e6, 0.0, 0.0).clamp();
    assert_eq!(high, Rgb::new(255.0, 0.0, 0.0));
}

#[test]
fn test_out_of_gamut_xyz_clamps_silently() {
    init_tracing();
    let rgb = Color::from(Xyz::new(87.0, 100.0, 0.0)).convert(ColorModel::Rgb);
    assert!(rgb.is_valid());
    assert_close("xyz[87, 100, 0] -> rgb", rgb, Color::from(Rgb::new(255.0, 255.0, 0.0)));
}
