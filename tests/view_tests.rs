// tests/view_tests.rs

use macroquad::prelude::*;
use tilemap_compositor::{compose, demo_map, Palette, Step, TileKind, ViewCommand, ViewState};

fn demo_view() -> ViewState {
    // start scale 5.0, pan step 20 px, scale step 0.2, minimum scale 0.2
    ViewState::new(5.0, 20, 0.2, 0.2)
}

#[test]
fn panning_moves_the_offset_without_rescaling() {
    let mut view = demo_view();
    for _ in 0..3 {
        assert_eq!(view.apply(ViewCommand::PanRight), Step::Idle);
    }
    assert_eq!((view.pan_x, view.pan_y), (60, 0));

    assert_eq!(view.apply(ViewCommand::PanDown), Step::Idle);
    assert_eq!(view.apply(ViewCommand::PanLeft), Step::Idle);
    assert_eq!(view.apply(ViewCommand::PanUp), Step::Idle);
    assert_eq!((view.pan_x, view.pan_y), (40, 0));
    assert_eq!(view.scale(), 5.0);
}

#[test]
fn zoom_in_recomposes_exactly_once_then_commits() {
    let palette = Palette::from_fn(|_| Image::gen_image_color(16, 16, WHITE));
    let map = demo_map().unwrap();
    let mut view = demo_view();
    let mut composites = 0;

    let candidate = match view.apply(ViewCommand::ZoomIn) {
        Step::Rescale(scale) => scale,
        step => panic!("expected a rescale, got {:?}", step),
    };
    assert!((candidate - 5.2).abs() < 1e-5);
    // the candidate is not committed until the recompose succeeds
    assert_eq!(view.scale(), 5.0);

    let image = compose(&map, &palette, 16, 16, candidate).unwrap();
    composites += 1;
    view.commit_scale(candidate);

    assert_eq!(composites, 1);
    assert!((view.scale() - 5.2).abs() < 1e-5);
    // 8 * 16 * 5.2 = 665.6, ceiling 666
    assert_eq!((image.width(), image.height()), (666, 666));
}

#[test]
fn zoom_out_clamps_at_the_minimum_scale() {
    let mut view = ViewState::new(0.3, 20, 0.2, 0.2);

    match view.apply(ViewCommand::ZoomOut) {
        Step::Rescale(scale) => {
            assert!((scale - 0.2).abs() < 1e-6);
            view.commit_scale(scale);
        }
        step => panic!("expected a rescale, got {:?}", step),
    }

    // already at the minimum: the candidate stays pinned there
    match view.apply(ViewCommand::ZoomOut) {
        Step::Rescale(scale) => assert!((scale - 0.2).abs() < 1e-6),
        step => panic!("expected a rescale, got {:?}", step),
    }
}

#[test]
fn rejected_rescale_leaves_the_view_untouched() {
    let mut view = demo_view();

    // caller never commits, as after a failed composite allocation
    let _ = view.apply(ViewCommand::ZoomIn);
    assert_eq!(view.scale(), 5.0);
    assert_eq!((view.pan_x, view.pan_y), (0, 0));
}

#[test]
fn quit_ends_the_loop() {
    let mut view = demo_view();
    assert_eq!(view.apply(ViewCommand::Quit), Step::Quit);
}

#[test]
fn palette_covers_every_tile_kind() {
    let palette = Palette::from_fn(|kind| {
        Image::gen_image_color(16, 16, Color::from_rgba(kind as u8, 0, 0, 255))
    });
    for kind in TileKind::ALL {
        assert_eq!(palette.tile(kind).image.width(), 16);
    }
}
