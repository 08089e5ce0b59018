//! Headless demo: fits a unit cube, replays a scripted drag/wheel gesture
//! and logs each resulting camera pose.

use std::path::Path;

use glam::{DVec2, DVec3};
use orbicam::camera::{BoundingBox, CameraController};
use orbicam::input::{InputEvent, MouseButton};
use orbicam::picking::PickHit;
use orbicam::Options;

/// Scripted gesture: orbit drag, pan drag, then two wheel notches in.
const GESTURE: [InputEvent; 8] = [
    InputEvent::PointerDown {
        button: MouseButton::Left,
        x: 400.0,
        y: 300.0,
    },
    InputEvent::PointerMoved { x: 360.0, y: 290.0 },
    InputEvent::PointerUp { x: 360.0, y: 290.0 },
    InputEvent::PointerDown {
        button: MouseButton::Right,
        x: 360.0,
        y: 290.0,
    },
    InputEvent::PointerMoved { x: 380.0, y: 300.0 },
    InputEvent::PointerUp { x: 380.0, y: 300.0 },
    InputEvent::Wheel {
        delta: 120.0,
        x: 400.0,
        y: 300.0,
    },
    InputEvent::Wheel {
        delta: 120.0,
        x: 400.0,
        y: 300.0,
    },
];

fn load_options() -> Options {
    let Some(arg) = std::env::args().nth(1) else {
        return Options::default();
    };
    match Options::load(Path::new(&arg)) {
        Ok(options) => {
            log::info!("Loaded camera options from '{arg}'");
            options
        }
        Err(e) => {
            log::error!("Failed to load options '{arg}': {e}");
            std::process::exit(1);
        }
    }
}

fn log_pose(label: &str, controller: &CameraController) {
    let s = controller.spherical();
    log::info!(
        "{label}: eye {:.3} target {:.3} radius {:.3} azimuth {:.3} polar \
         {:.3}",
        controller.position(),
        controller.target(),
        s.radius(),
        s.azimuth(),
        s.polar(),
    );
}

fn main() {
    env_logger::init();

    let options = load_options();
    let mut controller = match CameraController::new(
        DVec3::new(0.0, 20.0, 20.0),
        DVec3::ZERO,
        options.camera,
    ) {
        Ok(controller) => controller,
        Err(e) => {
            log::error!("Failed to create camera: {e}");
            std::process::exit(1);
        }
    };
    log_pose("initial", &controller);

    let cube = BoundingBox::new(DVec3::splat(-0.5), DVec3::splat(0.5));
    controller.fit_to_bounds(&cube);
    log_pose("fit unit cube", &controller);

    // Stand-in for a scene ray-pick: everything under the cursor hits the
    // cube's top face.
    let picker = |_: DVec2| Some(PickHit::at(DVec3::new(0.0, 0.5, 0.0)));
    for event in GESTURE {
        if controller.handle_event(event, &picker) {
            log_pose(&format!("{event:?}"), &controller);
        }
    }

    log::info!("view matrix: {:.4}", controller.view_matrix());
}
