use std::cell::RefCell;
use std::error::Error;

use vexel_core::{ErrorSink, Pointf};
use vexel_graphics::geometry::create_square;
use vexel_graphics::{intersects, Polygon};

#[derive(Default)]
struct RecordingSink {
    reports: RefCell<Vec<(String, String)>>,
}

impl ErrorSink for RecordingSink {
    fn report(&self, message: &str, cause: &(dyn Error + 'static)) {
        self.reports
            .borrow_mut()
            .push((message.to_string(), cause.to_string()));
    }
}

#[test]
fn overlapping_squares_intersect() {
    let first = Polygon::new(create_square(0.0, 0.0, 50.0).to_vec());
    let second = Polygon::new(create_square(25.0, 25.0, 50.0).to_vec());
    let sink = RecordingSink::default();

    assert!(intersects(&first, &second, &sink, false));
    assert!(sink.reports.borrow().is_empty());
}

#[test]
fn disjoint_squares_do_not_intersect() {
    let first = Polygon::new(create_square(0.0, 0.0, 10.0).to_vec());
    let second = Polygon::new(create_square(100.0, 100.0, 10.0).to_vec());
    let sink = RecordingSink::default();

    assert!(!intersects(&first, &second, &sink, false));
    assert!(sink.reports.borrow().is_empty());
}

#[test]
fn edge_abutting_squares_do_not_intersect() {
    let first = Polygon::new(create_square(0.0, 0.0, 50.0).to_vec());
    let second = Polygon::new(create_square(50.0, 0.0, 50.0).to_vec());
    let sink = RecordingSink::default();

    assert!(
        !intersects(&first, &second, &sink, false),
        "a shared edge encloses no area"
    );
}

#[test]
fn corner_touching_squares_do_not_intersect() {
    let first = Polygon::new(create_square(0.0, 0.0, 50.0).to_vec());
    let second = Polygon::new(create_square(50.0, 50.0, 50.0).to_vec());
    let sink = RecordingSink::default();

    assert!(!intersects(&first, &second, &sink, false));
}

#[test]
fn containment_counts_as_intersection() {
    let outer = Polygon::new(create_square(0.0, 0.0, 100.0).to_vec());
    let inner = Polygon::new(create_square(40.0, 40.0, 20.0).to_vec());
    let sink = RecordingSink::default();

    assert!(intersects(&outer, &inner, &sink, false));
}

#[test]
fn missing_boundary_reports_and_resolves_to_false() {
    let mut first = Polygon::new(create_square(0.0, 0.0, 50.0).to_vec());
    let second = Polygon::new(create_square(10.0, 10.0, 50.0).to_vec());
    first.set_collision_path(None);
    let sink = RecordingSink::default();

    assert!(!intersects(&first, &second, &sink, false));

    let reports = sink.reports.borrow();
    assert_eq!(reports.len(), 1);
    let (message, cause) = &reports[0];
    assert_eq!(message, "A collision error occurred.");
    assert!(
        cause.contains(first.id()),
        "cause should name the degraded polygon: {cause}"
    );
}

#[test]
fn scene_transitions_suppress_missing_boundary_reports() {
    let first = Polygon::new(create_square(0.0, 0.0, 50.0).to_vec());
    let mut second = Polygon::new(create_square(10.0, 10.0, 50.0).to_vec());
    second.set_collision_path(None);
    let sink = RecordingSink::default();

    assert!(!intersects(&first, &second, &sink, true));
    assert!(sink.reports.borrow().is_empty());
}
