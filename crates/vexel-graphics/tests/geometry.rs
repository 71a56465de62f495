use lyon::math::point;
use lyon::path::Path;

use vexel_core::maths::FLOAT_PRECISION;
use vexel_core::Pointf;
use vexel_graphics::geometry::{
    bounding_box, center_of, create_box, create_box_at, create_box_from_extent,
    create_box_from_extent_at, create_collision_outline, create_path, create_rect, create_square,
    create_square_around, create_square_at, length_of_path, path_contains, path_equals,
    points_of_path, random_color, random_color_with_alpha, random_font, FONT_FAMILIES,
};
use vexel_graphics::{GraphicsError, Rect};

fn points(raw: &[(f32, f32)]) -> Vec<Pointf> {
    raw.iter().map(|&(x, y)| Pointf::new(x, y)).collect()
}

#[test]
fn boxes_are_built_corner_order_tl_tr_br_bl() {
    let expected = [
        Pointf::new(5.0, 5.0),
        Pointf::new(40.0, 5.0),
        Pointf::new(40.0, 35.0),
        Pointf::new(5.0, 35.0),
    ];

    assert_eq!(create_box(5.0, 5.0, 35.0, 30.0), expected);
    assert_eq!(
        create_box_at(Pointf::new(5.0, 5.0), Pointf::new(35.0, 30.0)),
        expected
    );
}

#[test]
fn square_variants_agree_with_the_general_box() {
    let expected = create_box(5.0, 5.0, 35.0, 35.0);

    assert_eq!(create_square(5.0, 5.0, 35.0), expected);
    assert_eq!(create_square_at(Pointf::new(5.0, 5.0), 35.0), expected);
    assert_eq!(
        create_square_around(Pointf::new(22.5, 22.5), 35.0),
        expected
    );
}

#[test]
fn extent_boxes_take_pixel_sizes() {
    assert_eq!(
        create_box_from_extent((120, 80)),
        create_box(0.0, 0.0, 120.0, 80.0)
    );
    assert_eq!(
        create_box_from_extent_at((120, 80), Pointf::new(10.0, 20.0)),
        create_box(10.0, 20.0, 120.0, 80.0)
    );
}

#[test]
fn rect_from_box_preserves_origin_and_size() {
    let rect = match create_rect(&create_box(10.0, 20.0, 30.0, 40.0)) {
        Ok(rect) => rect,
        Err(err) => panic!("expected a rect: {err}"),
    };

    assert_eq!(rect, Rect::new(10.0, 20.0, 30.0, 40.0));
    assert!(rect.contains(Pointf::new(10.0, 20.0)), "boundary is inside");
    assert!(rect.contains(Pointf::new(40.0, 60.0)));
    assert!(!rect.contains(Pointf::new(40.1, 30.0)));
}

#[test]
fn rect_requires_exactly_four_points() {
    let result = create_rect(&points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]));

    assert!(matches!(
        result,
        Err(GraphicsError::BoundaryPointCount { count: 3 })
    ));
}

#[test]
fn bounding_box_wraps_an_octagon() {
    let octagon = points(&[
        (15.0, 0.0),
        (35.0, 0.0),
        (50.0, 15.0),
        (50.0, 35.0),
        (35.0, 50.0),
        (15.0, 50.0),
        (0.0, 35.0),
        (0.0, 15.0),
    ]);

    assert_eq!(bounding_box(&octagon), create_box(0.0, 0.0, 50.0, 50.0));
}

#[test]
fn center_is_the_mean_of_the_vertices() {
    let triangle = points(&[(0.0, 0.0), (30.0, 0.0), (0.0, 30.0)]);

    assert_eq!(center_of(&triangle), Pointf::new(10.0, 10.0));
    assert_eq!(
        center_of(&create_square(13.0, 13.0, 24.0)),
        Pointf::new(25.0, 25.0)
    );
}

#[test]
fn path_round_trips_its_points() {
    let square = create_square(0.0, 0.0, 25.0);
    let path = create_path(&square);

    assert_eq!(length_of_path(&path), 4);
    assert_eq!(points_of_path(&path), square.to_vec());
}

#[test]
fn path_length_counts_moves_and_lines() {
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    for i in 1..26 {
        builder.line_to(point(i as f32, 0.0));
    }
    builder.close();
    let path = builder.build();

    assert_eq!(length_of_path(&path), 26);
}

#[test]
fn path_length_counts_every_subpath() {
    let mut builder = Path::builder();
    for subpath in 0..5 {
        let offset = subpath as f32 * 100.0;
        builder.begin(point(offset, 0.0));
        for i in 1..26 {
            builder.line_to(point(offset + i as f32, i as f32));
        }
        builder.close();
    }
    let path = builder.build();

    assert_eq!(length_of_path(&path), 130);
}

#[test]
fn equal_paths_compare_equal() {
    let square = create_square(5.0, 5.0, 20.0);
    let first = create_path(&square);
    let second = create_path(&square);

    assert!(matches!(path_equals(&first, &second), Ok(true)));
}

#[test]
fn same_length_different_points_compare_unequal() {
    let first = create_path(&create_square(0.0, 0.0, 20.0));
    let second = create_path(&create_square(1.0, 0.0, 20.0));

    assert!(matches!(path_equals(&first, &second), Ok(false)));
}

#[test]
fn length_mismatch_is_an_error_with_both_lengths() {
    let square = create_path(&create_square(0.0, 0.0, 20.0));
    let triangle = create_path(&points(&[(0.0, 0.0), (20.0, 0.0), (10.0, 20.0)]));

    let err = match path_equals(&square, &triangle) {
        Err(err) => err,
        Ok(matched) => panic!("expected a mismatch error, got Ok({matched})"),
    };
    assert_eq!(
        err.to_string(),
        "Path lengths differ\nPath 1 had a length of 4, but path 2 had a length of 3."
    );
}

#[test]
fn containment_follows_the_traced_polygon() {
    let path = create_path(&create_square(10.0, 10.0, 30.0));

    assert!(path_contains(&path, Pointf::new(25.0, 25.0)));
    assert!(!path_contains(&path, Pointf::new(5.0, 25.0)));
    assert!(!path_contains(&path, Pointf::new(25.0, 45.0)));
}

#[test]
fn two_overlapping_boxes_merge_into_a_six_point_outline() {
    let first = create_square(0.0, 0.0, 50.0);
    let second = create_square(25.0, 25.0, 50.0);

    let outline = match create_collision_outline(&[&first, &second]) {
        Ok(outline) => outline,
        Err(err) => panic!("expected an outline: {err}"),
    };
    assert_eq!(
        outline,
        points(&[
            (0.0, 0.0),
            (50.0, 0.0),
            (75.0, 25.0),
            (75.0, 75.0),
            (25.0, 75.0),
            (0.0, 50.0),
        ])
    );
}

#[test]
fn three_staircase_boxes_merge_into_a_seven_point_outline() {
    let first = create_square(0.0, 0.0, 60.0);
    let second = create_square(40.0, 20.0, 60.0);
    let third = create_square(20.0, 40.0, 60.0);

    let outline = match create_collision_outline(&[&first, &second, &third]) {
        Ok(outline) => outline,
        Err(err) => panic!("expected an outline: {err}"),
    };
    assert_eq!(
        outline,
        points(&[
            (0.0, 0.0),
            (60.0, 0.0),
            (100.0, 20.0),
            (100.0, 80.0),
            (80.0, 100.0),
            (20.0, 100.0),
            (0.0, 60.0),
        ])
    );
}

#[test]
fn outline_rejects_non_box_shapes() {
    let box_shape = create_box(0.0, 0.0, 10.0, 10.0);
    let triangle = points(&[(0.0, 0.0), (10.0, 0.0), (5.0, 10.0)]);

    let result = create_collision_outline(&[&box_shape, &triangle]);

    assert!(matches!(
        result,
        Err(GraphicsError::BoundaryPointCount { count: 3 })
    ));
}

#[test]
fn random_colors_are_opaque_unless_alpha_is_requested() {
    for _ in 0..32 {
        assert_eq!(random_color().a, 255);
        // Any alpha is valid here; the call just has to produce one.
        let _ = random_color_with_alpha();
    }
}

#[test]
fn random_fonts_stay_in_their_domain() {
    for _ in 0..32 {
        let font = random_font();
        assert!(FONT_FAMILIES.contains(&font.family));
        assert!((1..=96).contains(&font.size));
    }
}

#[test]
fn float_comparison_tolerance_is_tight() {
    let a = Pointf::new(10.0, 10.0);
    let b = Pointf::new(10.0 + FLOAT_PRECISION / 2.0, 10.0);

    assert!(a.equals_epsilon(b, FLOAT_PRECISION));
    assert!(!a.equals_epsilon(Pointf::new(10.001, 10.0), FLOAT_PRECISION));
}
