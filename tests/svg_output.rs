//! SVG output tests for the full render pipeline

use tooltip_triangle::{render, render_with_config, RenderConfig, SvgConfig};

#[test]
fn test_two_sided_pointer_snapshot() {
    let svg = render(
        r#"
        triangle pointer [
            triangleOrientation: horizontal,
            triangleStrokeColor: red,
            triangleStrokeWidth: 4,
            triangleTwoSidedStroke: true,
        ]
    "#,
    )
    .unwrap();

    insta::assert_snapshot!(svg.trim_end(), @r###"
    <?xml version="1.0" encoding="UTF-8"?>
    <svg xmlns="http://www.w3.org/2000/svg" id="pointer" width="100" height="100" viewBox="0 0 100 100">
      <path class="tri-fill" d="M100 0 L0 50 L100 100 Z" fill="#000000" stroke="none"/>
      <path class="tri-stroke" d="M100 0 L0 50 M0 50 L100 100" fill="none" stroke="#ff0000" stroke-width="4" shape-rendering="crispEdges"/>
    </svg>
    "###);
}

#[test]
fn test_translucent_fill() {
    let svg = render("triangle [triangleColor: #80ff0000]").unwrap();
    assert!(svg.contains(r##"fill="#ff0000""##));
    assert!(svg.contains(r#"fill-opacity="0.502""#));
}

#[test]
fn test_fill_comes_before_stroke() {
    let svg = render("triangle [triangleStrokeWidth: 1]").unwrap();
    let fill = svg.find("tri-fill").expect("fill present");
    let stroke = svg.find("tri-stroke").expect("stroke present");
    assert!(fill < stroke);
}

#[test]
fn test_unset_stroke_color_is_white() {
    let svg = render("triangle [triangleStrokeWidth: 2]").unwrap();
    assert!(svg.contains(r##"stroke="#ffffff""##));
}

#[test]
fn test_odd_sized_box() {
    let config = RenderConfig::new()
        .with_size(25.0, 11.0)
        .with_svg(SvgConfig::new().with_standalone(false));
    let svg = render_with_config("triangle", config).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"d="M0 11 L12.5 0 L25 11 Z""#));
}
