//! Positioning tests against recorded layouts
//!
//! Builds small pages in a LayoutSnapshot and checks offset, position and
//! overlay placement end to end.

use fos_geometry::{DomRect, ElementGeometry, ElementId, LayoutSnapshot};
use fos_position::{
    Alignment, ElementPosition, Placement, PositionConfig, PositionError, Positioner, Rect, Side,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Page with a relatively positioned container holding a host button, and
/// an 80x20 tooltip appended to the body.
struct Page {
    snapshot: LayoutSnapshot,
    container: ElementId,
    host: ElementId,
    tooltip: ElementId,
}

fn page() -> Page {
    let mut snapshot = LayoutSnapshot::new();
    let body = snapshot
        .append_element(ElementId::ROOT, ElementGeometry::sized(0.0, 0.0, 1024.0, 2000.0))
        .unwrap();
    let container = snapshot
        .append_element(
            body,
            ElementGeometry::sized(20.0, 300.0, 600.0, 400.0)
                .with_border(3.0, 4.0)
                .with_scroll_size(600.0, 900.0),
        )
        .unwrap();
    snapshot.set_computed_style(container, "position", "relative").unwrap();

    let host = snapshot
        .append_element(container, ElementGeometry::sized(50.0, 100.0, 200.0, 40.0))
        .unwrap();
    // Viewport rect: container at (20, 300) plus its border, plus host offset
    snapshot
        .set_bounding_rect(host, DomRect::from_xywh(74.0, 403.0, 200.0, 40.0))
        .unwrap();

    let tooltip = snapshot
        .append_element(body, ElementGeometry::sized(0.0, 0.0, 80.0, 20.0))
        .unwrap();

    Page {
        snapshot,
        container,
        host,
        tooltip,
    }
}

#[test]
fn test_offset_is_viewport_plus_scroll() {
    init_tracing();
    let mut page = page();
    page.snapshot.set_page_offset(Some((0.0, 250.0)));

    let rect = Positioner::new(&page.snapshot).offset(page.host);
    assert_eq!(
        rect,
        Rect {
            width: 200.0,
            height: 40.0,
            top: 653.0,
            left: 74.0,
        }
    );
}

#[test]
fn test_position_relative_to_positioned_container() {
    init_tracing();
    let page = page();
    let positioner = Positioner::new(&page.snapshot);

    assert_eq!(positioner.parent_offset_el(page.host), page.container);

    let rect = positioner.position(page.host);
    assert_eq!(
        rect,
        Rect {
            width: 200.0,
            height: 40.0,
            top: 100.0,
            left: 50.0,
        }
    );
}

#[test]
fn test_position_accounts_for_container_scroll() {
    let mut page = page();
    page.snapshot.scroll_to(page.container, 0.0, 60.0).unwrap();
    // Scrolling the container moves the host up in the viewport
    page.snapshot
        .set_bounding_rect(page.host, DomRect::from_xywh(74.0, 343.0, 200.0, 40.0))
        .unwrap();

    let rect = Positioner::new(&page.snapshot).position(page.host);
    assert_eq!(rect.top, 100.0);
    assert_eq!(rect.left, 50.0);
}

#[test]
fn test_position_equals_offset_under_document() {
    let mut page = page();
    page.snapshot.set_page_offset(Some((10.0, 90.0)));
    let positioner = Positioner::new(&page.snapshot);

    assert_eq!(positioner.parent_offset_el(page.tooltip), ElementId::DOCUMENT);
    assert_eq!(positioner.position(page.tooltip), positioner.offset(page.tooltip));
}

#[test]
fn test_static_chain_terminates_at_document() {
    let mut snapshot = LayoutSnapshot::new();
    let mut parent = ElementId::ROOT;
    for _ in 0..10 {
        parent = snapshot
            .append_element(parent, ElementGeometry::sized(1.0, 1.0, 10.0, 10.0))
            .unwrap();
    }

    let positioner = Positioner::new(&snapshot);
    assert_eq!(positioner.parent_offset_el(parent), ElementId::DOCUMENT);
}

#[test]
fn test_cyclic_offset_parents_terminate() {
    init_tracing();
    let mut snapshot = LayoutSnapshot::new();
    let a = snapshot.append_element(ElementId::ROOT, ElementGeometry::default()).unwrap();
    let b = snapshot.append_element(a, ElementGeometry::default()).unwrap();
    snapshot.set_offset_parent(a, Some(b)).unwrap();

    let positioner = Positioner::new(&snapshot);
    assert_eq!(positioner.parent_offset_el(b), ElementId::DOCUMENT);
}

#[test]
fn test_top_center_above_host() {
    let page = page();
    let positioner = Positioner::new(&page.snapshot);

    let pos = positioner
        .position_elements_str(page.host, page.tooltip, "top-center", false)
        .unwrap();
    assert_eq!(pos, ElementPosition::new(80.0, 110.0));
}

#[test]
fn test_right_top_beside_host() {
    let page = page();
    let positioner = Positioner::new(&page.snapshot);

    let pos = positioner
        .position_elements_str(page.host, page.tooltip, "right-top", false)
        .unwrap();
    assert_eq!(pos, ElementPosition::new(100.0, 250.0));
}

#[test]
fn test_left_defaults_to_center() {
    let page = page();
    let positioner = Positioner::new(&page.snapshot);

    let pos = positioner
        .position_elements_str(page.host, page.tooltip, "left", false)
        .unwrap();
    assert_eq!(pos, ElementPosition::new(110.0, -30.0));
}

#[test]
fn test_append_to_body_uses_document_coordinates() {
    let page = page();
    let positioner = Positioner::new(&page.snapshot);
    let placement = Placement::new(Side::Bottom, Alignment::End);

    let in_body = positioner.position_elements(page.host, page.tooltip, placement, true);
    assert_eq!(in_body, ElementPosition::new(443.0, 274.0));

    let in_container = positioner.position_elements(page.host, page.tooltip, placement, false);
    assert_eq!(in_container, ElementPosition::new(140.0, 250.0));
}

#[test]
fn test_lenient_bad_alignment_centers() {
    init_tracing();
    let page = page();
    let positioner = Positioner::new(&page.snapshot);

    let lenient = positioner
        .position_elements_str(page.host, page.tooltip, "top-bottom", false)
        .unwrap();
    let centered = positioner
        .position_elements_str(page.host, page.tooltip, "top-center", false)
        .unwrap();
    assert_eq!(lenient, centered);
}

#[test]
fn test_strict_bad_alignment_errors() {
    let page = page();
    let positioner = Positioner::with_config(&page.snapshot, PositionConfig::strict());

    let err = positioner
        .position_elements_str(page.host, page.tooltip, "left-foo", false)
        .unwrap_err();
    assert_eq!(
        err,
        PositionError::InvalidPlacement {
            placement: "left-foo".to_string(),
            token: "foo".to_string(),
            reason: "unknown alignment",
        }
    );
}

#[test]
fn test_hidden_host_uses_offset_size() {
    let mut page = page();
    page.snapshot
        .set_bounding_rect(page.host, DomRect::from_xywh(74.0, 403.0, 0.0, 0.0))
        .unwrap();

    let rect = Positioner::new(&page.snapshot).position(page.host);
    assert_eq!(rect.width, 200.0);
    assert_eq!(rect.height, 40.0);
}

#[test]
fn test_inline_position_when_computed_unsupported() {
    let mut page = page();
    page.snapshot.set_computed_style_supported(false);
    let positioner = Positioner::new(&page.snapshot);
    assert_eq!(positioner.parent_offset_el(page.host), ElementId::DOCUMENT);

    page.snapshot.set_inline_style(page.container, "position", "absolute").unwrap();
    let positioner = Positioner::new(&page.snapshot);
    assert_eq!(positioner.parent_offset_el(page.host), page.container);
}

#[test]
fn test_non_negative_sizes() {
    let page = page();
    let positioner = Positioner::new(&page.snapshot);

    for el in [page.container, page.host, page.tooltip] {
        let rect = positioner.offset(el);
        assert!(rect.width >= 0.0 && rect.height >= 0.0);
    }
}
