mod common;

use canny_edges::image::{GrayImageU8, ImageF32, ImageU8};
use canny_edges::stages::{estimate_gradients, suppress_non_maxima, HysteresisClassifier};
use canny_edges::{CannyError, CannyParams, CannyPipeline, EdgeMap, EdgeState};
use common::synthetic_image::{checkerboard_u8, isolated_point_u8, noise_u8, square_u8};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assert_border_clear(map: &EdgeMap) {
    let (w, h) = map.dims();
    for x in 0..w {
        assert_eq!(map.state(x, 0), EdgeState::None, "top ({x},0)");
        assert_eq!(map.state(x, h - 1), EdgeState::None, "bottom ({x},{})", h - 1);
    }
    for y in 0..h {
        assert_eq!(map.state(0, y), EdgeState::None, "left (0,{y})");
        assert_eq!(map.state(w - 1, y), EdgeState::None, "right ({},{y})", w - 1);
    }
}

/// Magnitude after gradients and suppression, as the classifier sees it.
fn suppressed_magnitude(img: ImageU8<'_>) -> GrayImageU8 {
    let field = estimate_gradients(&img);
    let mut magnitude = field.magnitude;
    suppress_non_maxima(&mut magnitude, &field.angle).expect("matching buffers");
    magnitude
}

#[test]
fn isolated_point_lights_up_its_ring() {
    init_logging();
    let data = isolated_point_u8(5, 5, 2, 2, 200);
    let img = ImageU8::new(5, 5, &data).unwrap();
    let edges = CannyPipeline::new(CannyParams::new(10.0, 50.0, 3))
        .run(img)
        .unwrap();

    for y in 1..4 {
        for x in 1..4 {
            let expected = if (x, y) == (2, 2) {
                EdgeState::None
            } else {
                EdgeState::Strong
            };
            assert_eq!(edges.state(x, y), expected, "({x},{y})");
        }
    }
    assert_border_clear(&edges);
    assert_eq!(edges.counts().strong, 8);
}

#[test]
fn border_stays_clear_for_any_thresholds() {
    init_logging();
    let data = noise_u8(40, 30, 7);
    let img = ImageU8::new(40, 30, &data).unwrap();

    let everything = CannyPipeline::new(CannyParams::new(0.0, 0.0, 3))
        .run(img.clone())
        .unwrap();
    assert_border_clear(&everything);
    assert_eq!(everything.counts().strong, 38 * 28);

    for params in [
        CannyParams::default(),
        CannyParams::new(5.0, 250.0, 7),
        CannyParams::new(1.0, 2.0, 0),
    ] {
        let edges = CannyPipeline::new(params).run(img.clone()).unwrap();
        assert_border_clear(&edges);
    }
}

#[test]
fn square_outline_is_the_only_response() {
    init_logging();
    let data = square_u8(32, 32, (8, 8), (24, 24), 200, 20);
    let img = ImageU8::new(32, 32, &data).unwrap();
    let edges = CannyPipeline::default().run(img).unwrap();

    let strong = edges.pixels_in(EdgeState::Strong);
    assert!(!strong.is_empty());
    let on_outline = |v: usize| matches!(v, 7 | 8 | 23 | 24);
    for &(x, y) in &strong {
        assert!(on_outline(x) || on_outline(y), "stray edge at ({x},{y})");
        assert!((7..=24).contains(&x) && (7..=24).contains(&y));
    }
    assert_eq!(edges.state(16, 16), EdgeState::None);
    assert_eq!(edges.state(3, 3), EdgeState::None);
}

#[test]
fn repeated_runs_are_byte_identical() {
    init_logging();
    let data = checkerboard_u8(64, 48, 8);
    let img = ImageU8::new(64, 48, &data).unwrap();
    let pipeline = CannyPipeline::new(CannyParams::new(20.0, 60.0, 5));
    let first = pipeline.run(img.clone()).unwrap();
    let second = pipeline.run(img).unwrap();
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn high_above_range_yields_exactly_the_low_set() {
    init_logging();
    let data = noise_u8(24, 20, 11);
    let img = ImageU8::new(24, 20, &data).unwrap();
    let low = 60.0;
    let edges = CannyPipeline::new(CannyParams::new(low, 300.0, 3))
        .run(img.clone())
        .unwrap();
    assert_eq!(edges.counts().strong, 0);

    let magnitude = suppressed_magnitude(img);
    for y in 1..19 {
        for x in 1..23 {
            let expected = if magnitude.get(x, y) as f32 >= low {
                EdgeState::Weak
            } else {
                EdgeState::None
            };
            assert_eq!(edges.state(x, y), expected, "({x},{y})");
        }
    }
}

#[test]
fn equal_thresholds_leave_no_weak_pixels() {
    init_logging();
    let data = noise_u8(30, 30, 3);
    let img = ImageU8::new(30, 30, &data).unwrap();
    let edges = CannyPipeline::new(CannyParams::new(90.0, 90.0, 3))
        .run(img)
        .unwrap();
    assert_eq!(edges.counts().weak, 0);
}

#[test]
fn promotion_is_bounded_by_seeds_and_weak_set() {
    init_logging();
    let data = noise_u8(36, 28, 21);
    let img = ImageU8::new(36, 28, &data).unwrap();
    let report = CannyPipeline::new(CannyParams::new(40.0, 150.0, 3))
        .process(img)
        .unwrap();

    let (w, h) = report.edges.dims();
    for y in 0..h {
        for x in 0..w {
            let before = report.threshold_preview.state(x, y);
            let after = report.edges.state(x, y);
            if before == EdgeState::Strong {
                assert_eq!(after, EdgeState::Strong);
            }
            if before == EdgeState::None {
                assert_eq!(after, EdgeState::None);
            }
        }
    }
    let s = &report.summary;
    assert_eq!(s.counts.strong, s.seed_count + s.promoted_count);
    assert_eq!(s.counts.none + s.counts.weak + s.counts.strong, w * h);
}

#[test]
fn suppression_is_idempotent_on_real_gradients() {
    let data = noise_u8(20, 18, 5);
    let img = ImageU8::new(20, 18, &data).unwrap();
    let field = estimate_gradients(&img);
    let original = field.magnitude.clone();

    let mut once = field.magnitude.clone();
    suppress_non_maxima(&mut once, &field.angle).unwrap();
    for (a, b) in once.data().iter().zip(original.data()) {
        assert!(a <= b);
    }
    let mut twice = once.clone();
    suppress_non_maxima(&mut twice, &field.angle).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn weak_chain_reaches_only_within_window() {
    // seed at x=2, weak chain x=3..5, gap, isolated weak at x=10
    let mut magnitude = GrayImageU8::new(14, 7);
    magnitude.set(2, 3, 220);
    for x in 3..=5 {
        magnitude.set(x, 3, 45);
    }
    magnitude.set(10, 3, 45);

    let narrow = HysteresisClassifier::new(30.0, 100.0, 3)
        .classify(&magnitude)
        .unwrap();
    assert_eq!(narrow.pixels_in(EdgeState::Strong).len(), 4);
    assert_eq!(narrow.pixels_in(EdgeState::Weak), vec![(10, 3)]);

    let wide = HysteresisClassifier::new(30.0, 100.0, 11)
        .classify(&magnitude)
        .unwrap();
    assert_eq!(wide.state(10, 3), EdgeState::Strong);
    assert_eq!(wide.counts().weak, 0);
}

#[test]
fn mismatched_stage_buffers_are_rejected() {
    let data = noise_u8(10, 10, 1);
    let field = estimate_gradients(&ImageU8::new(10, 10, &data).unwrap());
    let mut magnitude = field.magnitude.clone();
    let wrong = ImageF32::new(10, 9);
    let err = suppress_non_maxima(&mut magnitude, &wrong).unwrap_err();
    assert_eq!(
        err,
        CannyError::DimensionMismatch {
            stage: "non-maximum suppression",
            expected: (10, 10),
            found: (10, 9),
        }
    );
    assert_eq!(magnitude, field.magnitude);
}

#[test]
fn batch_matches_individual_runs() {
    init_logging();
    let images: Vec<Vec<u8>> = (0..4).map(|seed| noise_u8(16, 12, seed)).collect();
    let views: Vec<ImageU8<'_>> = images
        .iter()
        .map(|d| ImageU8::new(16, 12, d).unwrap())
        .collect();
    let pipeline = CannyPipeline::new(CannyParams::new(25.0, 80.0, 3));
    let batch = pipeline.run_batch(&views);
    assert_eq!(batch.len(), views.len());
    for (result, view) in batch.into_iter().zip(&views) {
        assert_eq!(result.unwrap(), pipeline.run(view.clone()).unwrap());
    }
}

#[test]
fn invalid_configuration_is_reported() {
    let data = vec![0u8; 9];
    let img = ImageU8::new(3, 3, &data).unwrap();
    let strict = CannyParams::new(10.0, 20.0, 4).with_strict_window(true);
    assert!(matches!(
        CannyPipeline::new(strict).run(img.clone()),
        Err(CannyError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        CannyPipeline::new(CannyParams::new(50.0, 10.0, 3)).run(img),
        Err(CannyError::InvalidConfiguration(_))
    ));
}
