mod common;

use common::*;
use story_background::carousel::CarouselBinding;
use story_background::config::BackgroundConfig;
use story_background::controller::{BackgroundController, LayoutMode};

const PANEL_WIDTH: f32 = 2048.0;

#[test]
fn narrow_slides_share_panels() {
    let (mut controller, _sender) = started(MockSurface::new(600.0, 800.0, 1.0));

    controller.show_slide(LayoutMode::Narrow, 3);
    assert_eq!(controller.camera_x(), PANEL_WIDTH);
    assert_eq!(controller.active_panel(), Some(1));

    controller.show_slide(LayoutMode::Narrow, 6);
    assert_eq!(controller.camera_x(), PANEL_WIDTH * 3.0);
}

#[test]
fn wide_slides_move_on_group_boundaries_only() {
    let (mut controller, _sender) = started(MockSurface::new(1280.0, 720.0, 1.0));

    controller.show_slide(LayoutMode::Wide, 4);
    assert_eq!(controller.camera_x(), PANEL_WIDTH * 2.0);

    controller.show_slide(LayoutMode::Wide, 1);
    assert_eq!(controller.camera_x(), PANEL_WIDTH * 2.0);
    assert_eq!(controller.active_panel(), Some(2));
}

#[test]
fn entering_pulse_panel_arms_the_pulse() {
    let (mut controller, _sender) = started(MockSurface::new(600.0, 800.0, 1.0));

    controller.show_slide(LayoutMode::Narrow, 1);
    assert!(!controller.pulse().unwrap().is_requested());

    controller.show_slide(LayoutMode::Narrow, 2);
    assert!(controller.pulse().unwrap().is_requested());
}

#[test]
fn pulse_cycles_are_capped_per_visit() {
    let (mut controller, _sender) = started(MockSurface::new(600.0, 800.0, 1.0));
    controller.show_slide(LayoutMode::Narrow, 2);

    let mut now = 0;
    let mut attempts = 0;
    while now < 10_000 {
        if now % 1000 == 0 && attempts < 5 {
            controller.request_pulse();
            attempts += 1;
        }
        controller.on_frame(ms(now));
        now += 16;
    }

    let pulse = controller.pulse().unwrap();
    assert_eq!(attempts, 5);
    assert_eq!(pulse.repeats(), pulse.repeat_cap());
    assert!(!pulse.is_running());
    assert!(!controller.request_pulse());

    // Staying on the same panel does not reset the counter
    controller.show_slide(LayoutMode::Narrow, 3);
    assert!(!controller.pulse().unwrap().is_requested());

    // Leaving and coming back does
    controller.show_slide(LayoutMode::Narrow, 0);
    controller.show_slide(LayoutMode::Narrow, 2);
    assert_eq!(controller.pulse().unwrap().repeats(), 0);
    assert!(controller.pulse().unwrap().is_requested());
}

#[test]
fn pulse_ends_back_at_rest() {
    let (mut controller, _sender) = started(MockSurface::new(600.0, 800.0, 1.0));
    controller.show_slide(LayoutMode::Narrow, 2);

    for frame in 0..400u64 {
        controller.on_frame(ms(frame * 16));
    }

    let scene = controller.scene().unwrap();
    assert_eq!(scene.pulse.progress(), 0.0);
    assert_eq!(scene.panels.get(1).map(|p| p.progress), Some(0.0));
}

#[test]
fn reentering_mid_cycle_still_ends_at_rest() {
    let (mut controller, _sender) = started(MockSurface::new(600.0, 800.0, 1.0));
    controller.show_slide(LayoutMode::Narrow, 2);

    let mut now = 0;
    while now < 1500 {
        controller.on_frame(ms(now));
        now += 16;
    }
    assert!(controller.pulse().unwrap().is_running());

    controller.show_slide(LayoutMode::Narrow, 0);
    controller.show_slide(LayoutMode::Narrow, 2);
    while now < 20_000 {
        controller.on_frame(ms(now));
        now += 16;
    }

    let scene = controller.scene().unwrap();
    assert!(!scene.pulse.is_running());
    assert_eq!(scene.pulse.progress(), 0.0);
    assert_eq!(scene.panels.get(1).map(|p| p.progress), Some(0.0));
}

#[test]
fn missing_surface_makes_everything_a_no_op() {
    let mut controller: BackgroundController<MockSurface> =
        BackgroundController::new(BackgroundConfig::default());
    controller.start(None);

    assert!(!controller.is_running());
    assert!(controller.scene().is_none());
    assert!(!controller.on_frame(ms(0)));
    assert!(!controller.request_pulse());

    controller.show_slide(LayoutMode::Narrow, 3);
    controller.set_camera_x(100.0);
    controller.stop();
    assert_eq!(controller.camera_x(), 0.0);
}

#[test]
fn second_start_is_ignored() {
    let (mut controller, _sender) = started(MockSurface::new(1280.0, 720.0, 1.0));
    controller.show_slide(LayoutMode::Wide, 2);

    controller.start(Some(MockSurface::new(100.0, 100.0, 1.0)));
    assert_eq!(controller.camera_x(), PANEL_WIDTH);
    assert_eq!(surface(&controller).display.width, 1280.0);
}

#[test]
fn binding_rebuilds_carousel_on_resize() {
    let (mut controller, _sender) = started(MockSurface::new(1280.0, 720.0, 1.0));
    let mut binding = CarouselBinding::new(8, 769.0);

    binding.on_resize(1280.0, 720.0, &mut controller);
    assert_eq!(binding.mode(), Some(LayoutMode::Wide));
    assert_eq!(controller.camera_x(), 0.0);

    binding.next(&mut controller);
    assert_eq!(controller.camera_x(), PANEL_WIDTH);
    assert!(controller.pulse().unwrap().is_requested());

    // Going portrait keeps slide 2, which is still panel 1
    binding.on_resize(600.0, 800.0, &mut controller);
    assert_eq!(binding.mode(), Some(LayoutMode::Narrow));
    assert_eq!(binding.carousel().map(|c| c.active_index()), Some(2));
    assert_eq!(controller.camera_x(), PANEL_WIDTH);

    binding.next(&mut controller);
    binding.next(&mut controller);
    assert_eq!(controller.camera_x(), PANEL_WIDTH * 2.0);

    // Slide 4 in narrow mode is even, so wide mode maps it too
    binding.on_resize(1280.0, 720.0, &mut controller);
    assert_eq!(controller.camera_x(), PANEL_WIDTH * 2.0);
}

#[test]
fn odd_slide_carried_into_wide_layout_keeps_camera() {
    let (mut controller, _sender) = started(MockSurface::new(600.0, 800.0, 1.0));
    let mut binding = CarouselBinding::new(8, 769.0);

    binding.on_resize(600.0, 800.0, &mut controller);
    for _ in 0..3 {
        binding.next(&mut controller);
    }
    assert_eq!(controller.camera_x(), PANEL_WIDTH);

    binding.on_resize(1280.0, 720.0, &mut controller);
    assert_eq!(binding.carousel().map(|c| c.active_index()), Some(3));
    assert_eq!(controller.camera_x(), PANEL_WIDTH);
}

#[test]
fn binding_ignores_empty_viewport() {
    let (mut controller, _sender) = started(MockSurface::new(1280.0, 720.0, 1.0));
    let mut binding = CarouselBinding::new(8, 769.0);

    binding.on_resize(0.0, 0.0, &mut controller);
    assert!(binding.carousel().is_none());

    binding.next(&mut controller);
    assert_eq!(controller.camera_x(), 0.0);
}
