use super::*;
use crate::{
    compile::resolve::{measure, resolve},
    film::model::{Animation, Film, Scene, Step, ValueSpan},
    foundation::core::{Percent, Size, Viewport},
    host::memory::{MemoryHost, NodeId},
};

fn fade_film() -> Film {
    let mut step = Step {
        start: Percent(0.0),
        duration: Percent(100.0),
        properties: Default::default(),
        transition: Some(crate::Timing::Linear),
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

fn ctx_for(film: &Film, film_offset: f64) -> (MemoryHost, NodeId, FilmCtx<NodeId>) {
    let mut host = MemoryHost::new(Viewport::new(800.0, 1000.0));
    let root = host.insert_at("#film", None, Size::new(800.0, 500.0), film_offset);
    let wrapper = host.insert("#intro", Some(root), Size::new(800.0, 1000.0));
    let title = host.insert(".title", Some(wrapper), Size::new(300.0, 100.0));

    let measured = measure(&host, &root, film).unwrap();
    let resolved = resolve(film, &measured, host.viewport()).unwrap();
    let ctx = FilmCtx {
        film_offset,
        film_height: resolved.film_height,
        resolved,
    };
    (host, title, ctx)
}

#[test]
fn relative_offset_subtracts_the_film_start() {
    let (_, _, ctx) = ctx_for(&fade_film(), 300.0);
    assert_eq!(ctx.relative_offset(300.0), 0.0);
    assert_eq!(ctx.relative_offset(800.0), 500.0);
}

#[test]
fn in_range_ticks_write_styles() {
    let film = fade_film();
    let (mut host, title, ctx) = ctx_for(&film, 0.0);

    host.set_scroll_top(500.0);
    apply_frame(&mut host, &ctx);
    assert_eq!(host.style(title).unwrap().opacity, 0.5);
}

#[test]
fn out_of_range_ticks_keep_last_applied_styles() {
    let film = fade_film();
    let (mut host, title, ctx) = ctx_for(&film, 100.0);

    // Above the film: no write at all.
    host.set_scroll_top(0.0);
    apply_frame(&mut host, &ctx);
    assert_eq!(host.style(title), None);

    // Inside: a write happens.
    host.set_scroll_top(350.0);
    apply_frame(&mut host, &ctx);
    let applied = host.style(title).unwrap().clone();

    // Past the end: the last applied style is untouched.
    host.set_scroll_top(5000.0);
    apply_frame(&mut host, &ctx);
    assert_eq!(host.style(title), Some(&applied));
}

#[test]
fn stop_handle_is_shared_between_clones() {
    let handle = StopHandle::new();
    let clone = handle.clone();
    assert!(!handle.is_stopped());

    clone.stop();
    assert!(handle.is_stopped());
    assert!(clone.is_stopped());
}

#[test]
fn fixed_interval_waits_at_least_its_period() {
    let mut scheduler = FixedInterval::new(std::time::Duration::from_millis(2));
    let before = std::time::Instant::now();
    scheduler.next_frame();
    assert!(before.elapsed() >= std::time::Duration::from_millis(2));
}
