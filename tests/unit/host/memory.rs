use super::*;

fn host() -> (MemoryHost, NodeId, NodeId, NodeId) {
    let mut host = MemoryHost::new(Viewport::new(800.0, 600.0));
    let root = host.insert("#film", None, Size::new(800.0, 500.0));
    let scene = host.insert("#intro", Some(root), Size::new(800.0, 900.0));
    let title = host.insert(".title", Some(scene), Size::new(200.0, 40.0));
    (host, root, scene, title)
}

#[test]
fn query_is_scoped_to_a_subtree() {
    let (mut host, root, scene, title) = host();
    // Same selector outside the scene subtree.
    let stray = host.insert(".title", Some(root), Size::new(10.0, 10.0));

    assert_eq!(host.query("#intro", Some(&root)), Some(scene));
    assert_eq!(host.query(".title", Some(&scene)), Some(title));
    assert_eq!(host.query(".title", None), Some(title));
    assert_eq!(host.query(".missing", Some(&root)), None);
    // Scoping must not reach the sibling subtree.
    assert_ne!(host.query(".title", Some(&scene)), Some(stray));
}

#[test]
fn set_height_overrides_client_size_but_not_natural_height() {
    let (mut host, root, ..) = host();
    assert_eq!(host.client_size(&root).height, 500.0);

    host.set_height(&root, 1800.0);
    assert_eq!(host.client_size(&root).height, 1800.0);
    assert_eq!(host.natural_height(&root), 500.0);
    assert_eq!(host.height_override(root), Some(1800.0));
}

#[test]
fn styles_and_scroll_are_recorded() {
    let (mut host, _, _, title) = host();
    assert_eq!(host.style(title), None);

    host.set_scroll_top(250.0);
    assert_eq!(host.scroll_top(), 250.0);

    let style = ElementStyle {
        opacity: 0.25,
        ..ElementStyle::default()
    };
    host.apply_style(&title, &style);
    assert_eq!(host.style(title), Some(&style));
}
