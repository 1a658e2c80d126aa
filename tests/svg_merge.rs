use signprotmat::svg_merge::{measure, merge_layout, merge_legend, MergeLayout, SvgSize};
use signprotmat::Error;

const CHART: &str = concat!(
    "<?xml version=\"1.0\"?>\n",
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="300">"#,
    r#"<rect width="10" height="10"/></svg>"#,
);

const LEGEND: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="40">"#,
    r#"<circle cx="5" cy="5" r="4"/><text x="12" y="9">Class A</text></svg>"#,
);

#[test]
fn narrow_legend_is_centered_under_the_chart() {
    let l = merge_layout(SvgSize::new(400.0, 300.0), SvgSize::new(200.0, 40.0));
    assert_eq!(
        l,
        MergeLayout {
            width: 400.0,
            height: 340.0,
            legend_x: 100.0,
            legend_y: 300.0
        }
    );
}

#[test]
fn wide_legend_widens_the_document() {
    let l = merge_layout(SvgSize::new(300.0, 200.0), SvgSize::new(500.0, 60.0));
    assert_eq!(l.width, 500.0);
    assert_eq!(l.height, 260.0);
    assert_eq!(l.legend_x, 0.0);
    assert_eq!(l.legend_y, 200.0);
}

#[test]
fn measure_reads_root_size() {
    assert_eq!(measure(LEGEND).unwrap(), SvgSize::new(200.0, 40.0));
}

#[test]
fn merged_document_holds_legend_below_chart() {
    let merged = merge_legend(CHART, LEGEND).unwrap();
    assert!(merged.starts_with("<?xml"));
    assert!(merged.contains(r#"width="400""#));
    assert!(merged.contains(r#"height="340""#));
    assert!(merged.contains(r#"<g transform="translate(100 300)"><circle"#));
    assert!(merged.contains("Class A</text></g></svg>"));
    // The result is still a valid document of the new size.
    assert_eq!(measure(&merged).unwrap(), SvgSize::new(400.0, 340.0));
}

#[test]
fn invalid_input_is_an_svg_error() {
    assert!(matches!(merge_legend("not svg", LEGEND), Err(Error::Svg(_))));
    assert!(matches!(merge_legend(CHART, "<html/>"), Err(Error::Svg(_))));
}

#[test]
fn comment_before_root_is_left_alone() {
    let chart = "<?xml version=\"1.0\"?>\n<!-- exported from <svg> widget -->\n\
                 <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"400\" height=\"300\">\
                 <rect width=\"10\" height=\"10\"/></svg>";
    assert_eq!(measure(chart).unwrap(), SvgSize::new(400.0, 300.0));

    let merged = merge_legend(chart, LEGEND).unwrap();
    assert!(merged.contains("<!-- exported from <svg> widget -->"));
    assert!(merged.contains(r#"height="340""#));
    assert_eq!(measure(&merged).unwrap(), SvgSize::new(400.0, 340.0));
}

#[test]
fn self_closing_chart_root_gets_the_legend() {
    let chart = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="50"/>"#;
    let merged = merge_legend(chart, LEGEND).unwrap();
    assert!(merged.contains(r#"<g transform="translate(0 50)"><circle"#));
    assert!(merged.ends_with("</g></svg>"));
    assert_eq!(measure(&merged).unwrap(), SvgSize::new(200.0, 90.0));
}
