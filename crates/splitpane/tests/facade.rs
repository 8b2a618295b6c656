use std::cell::Cell;
use std::rc::Rc;

use splitpane::prelude::*;
use splitpane::{ConfigError, SPLITPANE_MARKER, load_config};
use tracing_test::traced_test;

fn two_pane_surface() -> (MemorySurface, NodeId) {
    let mut surface = MemorySurface::new();
    let root = surface.insert_root(Rect::from_size(800.0, 400.0));
    surface.add_marker(root, SPLITPANE_MARKER);
    surface.insert_child(root, Rect::from_size(400.0, 400.0)).unwrap();
    surface
        .insert_child(root, Rect::new(397.0, 0.0, 6.0, 400.0))
        .unwrap();
    surface.insert_child(root, Rect::default()).unwrap();
    (surface, root)
}

#[traced_test]
#[test]
fn loads_json_and_toml_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let json = dir.path().join("panes.JSON");
    std::fs::write(&json, r#"{ "min_width": 250 }"#).unwrap();
    let toml = dir.path().join("panes.conf");
    std::fs::write(&toml, "min_width = 300\n").unwrap();

    assert_eq!(load_config(&json).unwrap().min_width, 250.0);
    assert_eq!(load_config(&toml).unwrap().min_width, 300.0);
    assert!(logs_contain("config loaded"));

    std::fs::write(&toml, "{ \"min_width\": 300 }").unwrap();
    let err = load_config(&toml).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::Toml(_))));
}

#[test]
fn full_gesture_through_the_prelude() {
    let (mut surface, root) = two_pane_surface();
    let mut panes = splitpane::activate(&mut surface, &SplitpaneConfig::default()).unwrap();
    let notified = Rc::new(Cell::new(0));
    let counter = Rc::clone(&notified);
    let _subscription = panes
        .viewport()
        .subscribe(move |_| counter.set(counter.get() + 1));

    let pane = panes.pane(root).unwrap();
    assert_eq!(pane.thickness(), 6.0);
    assert_eq!(pane.orientation(), Orientation::Horizontal);

    let press = MouseEvent::new(MouseEventKind::Down(MouseButton::Left), 400.0, 100.0);
    panes.handle_event(&mut surface, &Event::Mouse(press));
    assert_eq!(panes.listeners().len(), 2);

    let step = MouseEvent::new(MouseEventKind::Drag(MouseButton::Left), 200.0, 100.0);
    let outcome = panes.handle_event(&mut surface, &Event::Mouse(step));
    assert!(outcome.prevent_default);
    let first = surface.style(panes.panes()[0].regions().first).unwrap();
    assert!(first.contains("width: 25%"), "{first}");
    assert!(first.contains("padding-right: 3px"), "{first}");

    let release = MouseEvent::new(MouseEventKind::Up(MouseButton::Left), 200.0, 100.0);
    let outcome = panes.handle_event(&mut surface, &Event::Mouse(release));
    assert!(outcome.resized);
    assert!(panes.listeners().is_empty());
    assert_eq!(notified.get(), 1);
    assert!(matches!(
        outcome.transitions[0].1.effect,
        DragEffect::Ended {
            last_ratio: Some(_),
            updates: 1
        }
    ));
}
