use super::*;
use crate::{
    animation::ease::Timing,
    driver::frame::Scheduler,
    film::model::{Animation, Scene, Step, ValueSpan},
    foundation::core::{Percent, Size, Viewport},
    host::memory::{MemoryHost, NodeId},
};

fn fade_film(transition: Option<Timing>) -> Film {
    let mut step = Step {
        start: Percent(0.0),
        duration: Percent(100.0),
        properties: Default::default(),
        transition,
    };
    step.properties.opacity = Some(ValueSpan::value(0.0, 1.0));
    Film::new(vec![Scene {
        key: "intro".to_string(),
        wrapper: "#intro".to_string(),
        time_factor: 1.0,
        animations: vec![Animation {
            key: "fade".to_string(),
            selector: ".title".to_string(),
            steps: vec![step],
        }],
    }])
}

fn fade_host(root_height: f64, scene_height: f64) -> (MemoryHost, NodeId, NodeId) {
    let mut host = MemoryHost::new(Viewport::new(800.0, 1000.0));
    let root = host.insert("#film", None, Size::new(800.0, root_height));
    let wrapper = host.insert("#intro", Some(root), Size::new(800.0, scene_height));
    let title = host.insert(".title", Some(wrapper), Size::new(300.0, 100.0));
    (host, root, title)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

#[test]
fn end_to_end_opacity_scenario() {
    init_tracing();
    // Viewport height 1000, scene container 1000, time factor 1: one step
    // spanning the whole scene fades opacity 0 -> 1 linearly.
    let film = fade_film(Some(Timing::Linear));
    let (mut host, root, title) = fade_host(500.0, 1000.0);
    let engine = Engine::init(&mut host, root, film).unwrap();

    host.set_scroll_top(0.0);
    engine.tick(&mut host);
    assert_eq!(host.style(title).unwrap().opacity, 0.0);

    host.set_scroll_top(500.0);
    engine.tick(&mut host);
    assert_eq!(host.style(title).unwrap().opacity, 0.5);

    host.set_scroll_top(1000.0);
    engine.tick(&mut host);
    assert_eq!(host.style(title).unwrap().opacity, 1.0);
}

#[test]
fn init_sizes_the_root_to_the_film_height() {
    let film = fade_film(None);
    let (mut host, root, _) = fade_host(500.0, 1000.0);
    let engine = Engine::init(&mut host, root, film).unwrap();

    assert_eq!(engine.ctx().film_height, 1000.0);
    assert_eq!(host.height_override(root), Some(1000.0));
}

#[test]
fn init_fails_fast_on_invalid_configuration() {
    let mut film = fade_film(None);
    film.scenes[0].animations[0].steps.clear();
    let (mut host, root, _) = fade_host(500.0, 1000.0);
    assert!(Engine::init(&mut host, root, film).is_err());
}

#[test]
fn init_fails_fast_on_missing_elements() {
    let film = fade_film(None);
    let mut host = MemoryHost::new(Viewport::new(800.0, 1000.0));
    let root = host.insert("#film", None, Size::new(800.0, 500.0));
    // No #intro wrapper registered.
    let err = Engine::init(&mut host, root, film).unwrap_err();
    assert!(matches!(err, crate::ScrollfilmError::Compile(_)), "{err}");
}

#[test]
fn resize_rebuilds_geometry_wholesale() {
    let film = fade_film(Some(Timing::Linear));
    let (mut host, root, _title) = fade_host(500.0, 1000.0);
    let mut engine = Engine::init(&mut host, root, film).unwrap();
    assert_eq!(engine.ctx().film_height, 1000.0);

    // The viewport shrinks and the scene container relayouts to 600px.
    host.set_viewport(Viewport::new(400.0, 500.0));
    let wrapper = host.query("#intro", Some(&root)).unwrap();
    host.set_size(wrapper, Size::new(400.0, 600.0));
    engine.on_resize(&mut host).unwrap();

    assert_eq!(engine.ctx().film_height, 600.0);
    assert_eq!(host.height_override(root), Some(600.0));
    // Steps now resolve against the new viewport: 100% of 500 = 500px.
    let step = &engine.ctx().resolved.scenes[0].animations[0].steps[0];
    assert_eq!(step.duration_px, 500.0);
}

/// Scheduler that stops the engine after a fixed number of frames.
struct CountingScheduler {
    remaining: u32,
    stop: crate::StopHandle,
}

impl Scheduler for CountingScheduler {
    fn next_frame(&mut self) {
        if self.remaining == 0 {
            self.stop.stop();
        } else {
            self.remaining -= 1;
        }
    }
}

#[test]
fn run_terminates_when_the_stop_handle_fires() {
    let film = fade_film(Some(Timing::Linear));
    let (mut host, root, title) = fade_host(500.0, 1000.0);
    let engine = Engine::init(&mut host, root, film).unwrap();

    host.set_scroll_top(250.0);
    let mut scheduler = CountingScheduler {
        remaining: 3,
        stop: engine.stop_handle(),
    };
    engine.run(&mut host, &mut scheduler);

    assert!(engine.stop_handle().is_stopped());
    assert_eq!(host.style(title).unwrap().opacity, 0.25);
}
