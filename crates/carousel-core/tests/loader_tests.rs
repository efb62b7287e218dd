// Host-side tests for the completion-counting load join and the mount pipeline.

use carousel_core::*;
use glam::DVec2;

#[derive(Default)]
struct CountingSurface {
    draws: usize,
}

impl Surface for CountingSurface {
    type Image = &'static str;

    fn clear_rect(&mut self, _rect: Rect) {}
    fn fill_rect(&mut self, _rect: Rect, _color: Rgb) {}
    fn draw_image(&mut self, _image: &&'static str, _rect: Rect) {
        self.draws += 1;
    }
}

/// Mirrors the web mount sequence: fit and draw only once the join is ready.
fn run_mount(progress: JoinProgress<&'static str>, surface: &mut CountingSurface) -> Option<Carousel<&'static str>> {
    match progress {
        JoinProgress::Ready(assets) => {
            let viewport = Viewport::new(640.0, 400.0).unwrap();
            let carousel = Carousel::mount(viewport, assets);
            carousel.render(surface);
            Some(carousel)
        }
        _ => None,
    }
}

#[test]
fn keeps_input_order_when_loads_finish_out_of_order() {
    let mut join = LoadJoin::new(4);
    assert!(matches!(join.complete(2, "c", 30.0, 10.0), JoinProgress::Pending));
    assert!(matches!(join.complete(0, "a", 10.0, 10.0), JoinProgress::Pending));
    assert!(matches!(join.complete(3, "d", 40.0, 10.0), JoinProgress::Pending));
    assert_eq!(join.remaining(), 1);

    let JoinProgress::Ready(assets) = join.complete(1, "b", 20.0, 10.0) else {
        panic!("join should be ready");
    };
    let handles: Vec<_> = assets.iter().map(|a| a.handle).collect();
    assert_eq!(handles, vec!["a", "b", "c", "d"]);
    assert_eq!(assets[2].natural(), DVec2::new(30.0, 10.0));
    assert!(join.is_resolved());
}

#[test]
fn resolves_exactly_once() {
    let mut join = LoadJoin::new(1);
    assert!(matches!(join.complete(0, "a", 1.0, 1.0), JoinProgress::Ready(_)));
    assert!(matches!(join.complete(0, "a", 1.0, 1.0), JoinProgress::Finished));
    assert!(matches!(join.fail(0, "a.jpg", "late"), JoinProgress::Finished));
}

#[test]
fn duplicate_and_unknown_completions_are_ignored() {
    let mut join = LoadJoin::new(2);
    assert!(matches!(join.complete(0, "a", 1.0, 1.0), JoinProgress::Pending));
    assert!(matches!(join.complete(0, "again", 1.0, 1.0), JoinProgress::Pending));
    assert!(matches!(join.complete(7, "x", 1.0, 1.0), JoinProgress::Pending));
    assert_eq!(join.remaining(), 1);
    let JoinProgress::Ready(assets) = join.complete(1, "b", 1.0, 1.0) else {
        panic!("join should be ready");
    };
    assert_eq!(assets[0].handle, "a");
}

#[test]
fn one_failure_halts_the_mount_cycle() {
    let mut surface = CountingSurface::default();
    let mut join = LoadJoin::new(4);
    let mut mounted = Vec::new();

    mounted.push(run_mount(join.complete(0, "a", 800.0, 400.0), &mut surface));
    let failure = join.fail(1, "images/1.jpg", "decode error");
    let JoinProgress::Failed(err) = failure else {
        panic!("expected failure");
    };
    assert_eq!(
        err,
        CarouselError::AssetLoadFailure {
            index: 1,
            locator: "images/1.jpg".into(),
            reason: "decode error".into(),
        }
    );
    assert!(err.to_string().contains("images/1.jpg"));

    // remaining loads arrive after the failure
    mounted.push(run_mount(join.complete(2, "c", 800.0, 400.0), &mut surface));
    mounted.push(run_mount(join.complete(3, "d", 800.0, 400.0), &mut surface));

    assert!(mounted.iter().all(Option::is_none));
    assert_eq!(surface.draws, 0);
}

#[test]
fn ready_join_runs_fit_then_draw() {
    let mut surface = CountingSurface::default();
    let mut join = LoadJoin::new(2);
    assert!(run_mount(join.complete(1, "b", 800.0, 400.0), &mut surface).is_none());
    let carousel = run_mount(join.complete(0, "a", 800.0, 400.0), &mut surface).unwrap();

    assert!(carousel.strip().iter().all(ImageAsset::is_fitted));
    assert_eq!(carousel.offset(), 0.0);
    // slot 0 at x=0 and slot 1 at x=640 both pass culling
    assert_eq!(surface.draws, 2);
}
