//! Merge a legend SVG underneath a chart SVG.
//!
//! Both documents are measured with `usvg`. The chart root grows to hold
//! the legend, and the legend's children are appended to the chart inside
//! a translated group, centered horizontally when the legend is narrower
//! than the chart. Everything outside the two roots (declarations,
//! comments, doctypes) is copied unchanged.

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::error::{Error, Result};

/// Width and height of an SVG document in user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgSize {
    pub width: f32,
    pub height: f32,
}

impl SvgSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Where the legend ends up inside the merged document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeLayout {
    pub width: f32,
    pub height: f32,
    pub legend_x: f32,
    pub legend_y: f32,
}

/// Compute the merged size and the legend offset.
pub fn merge_layout(chart: SvgSize, legend: SvgSize) -> MergeLayout {
    let (width, legend_x) = if legend.width > chart.width {
        (legend.width, 0.0)
    } else {
        (chart.width, (chart.width - legend.width) / 2.0)
    };
    MergeLayout {
        width,
        height: chart.height + legend.height,
        legend_x,
        legend_y: chart.height,
    }
}

/// Size of an SVG document as resolved by `usvg`.
pub fn measure(svg: &str) -> Result<SvgSize> {
    let tree = usvg::Tree::from_str(svg, &usvg::Options::default())?;
    let size = tree.size();
    Ok(SvgSize::new(size.width(), size.height()))
}

/// Append the contents of `legend_svg` below `chart_svg` and return the merged document.
pub fn merge_legend(chart_svg: &str, legend_svg: &str) -> Result<String> {
    let layout = merge_layout(measure(chart_svg)?, measure(legend_svg)?);
    let legend_children = root_children(legend_svg)?;

    let mut reader = Reader::from_str(chart_svg);
    let mut writer = Writer::new(Vec::with_capacity(chart_svg.len() + legend_svg.len()));
    // Depth inside the chart root; `None` until the root is seen.
    let mut depth: Option<usize> = None;
    let mut merged = false;

    loop {
        let event = reader.read_event().map_err(xml_error)?;
        match event {
            Event::Eof => break,
            Event::Start(e) if depth.is_none() && is_svg(&e) => {
                let root = resized_root(&e, &layout)?;
                writer.write_event(Event::Start(root)).map_err(xml_error)?;
                depth = Some(1);
            }
            Event::Empty(e) if depth.is_none() && is_svg(&e) => {
                let root = resized_root(&e, &layout)?;
                let name = String::from_utf8_lossy(root.name().as_ref()).into_owned();
                let end = BytesEnd::new(name);
                writer.write_event(Event::Start(root)).map_err(xml_error)?;
                write_legend_group(&mut writer, &layout, &legend_children)?;
                writer.write_event(Event::End(end)).map_err(xml_error)?;
                depth = Some(0);
                merged = true;
            }
            Event::Start(e) => {
                depth = depth.map(|d| d + 1);
                writer.write_event(Event::Start(e)).map_err(xml_error)?;
            }
            Event::End(e) => {
                if depth == Some(1) {
                    write_legend_group(&mut writer, &layout, &legend_children)?;
                    merged = true;
                }
                depth = depth.map(|d| d.saturating_sub(1));
                writer.write_event(Event::End(e)).map_err(xml_error)?;
            }
            other => writer.write_event(other).map_err(xml_error)?,
        }
    }

    if !merged {
        return Err(Error::Svg("no complete <svg> root element".to_string()));
    }
    let out = String::from_utf8(writer.into_inner()).map_err(|e| Error::Svg(e.to_string()))?;
    log::debug!(
        "Merged legend at ({}, {}), document now {}x{}",
        layout.legend_x,
        layout.legend_y,
        layout.width,
        layout.height
    );
    Ok(out)
}

fn xml_error(e: impl std::fmt::Display) -> Error {
    Error::Svg(e.to_string())
}

fn is_svg(e: &BytesStart<'_>) -> bool {
    e.local_name().as_ref() == b"svg"
}

/// Copy of the root tag with `width`/`height` replaced by the merged size.
fn resized_root(e: &BytesStart<'_>, layout: &MergeLayout) -> Result<BytesStart<'static>> {
    let mut root = e.clone().into_owned();
    root.clear_attributes();
    for attr in e.attributes() {
        let attr = attr.map_err(xml_error)?;
        if !matches!(attr.key.as_ref(), b"width" | b"height") {
            root.push_attribute(attr);
        }
    }
    root.push_attribute(("width", fmt_num(layout.width).as_str()));
    root.push_attribute(("height", fmt_num(layout.height).as_str()));
    Ok(root)
}

/// Events between the root's start and end tags.
fn root_children(svg: &str) -> Result<Vec<Event<'static>>> {
    let mut reader = Reader::from_str(svg);
    let mut depth = 0usize;
    let mut children = Vec::new();

    loop {
        let event = reader.read_event().map_err(xml_error)?;
        match event {
            Event::Eof => return Err(Error::Svg("no complete <svg> root element".to_string())),
            Event::Empty(e) if depth == 0 && is_svg(&e) => return Ok(children),
            Event::Start(e) if depth == 0 && is_svg(&e) => depth = 1,
            _ if depth == 0 => {}
            Event::Start(e) => {
                depth += 1;
                children.push(Event::Start(e.into_owned()));
            }
            Event::End(e) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(children);
                }
                children.push(Event::End(e.into_owned()));
            }
            other => children.push(other.into_owned()),
        }
    }
}

fn write_legend_group(
    writer: &mut Writer<Vec<u8>>,
    layout: &MergeLayout,
    children: &[Event<'static>],
) -> Result<()> {
    let translate = format!(
        "translate({} {})",
        fmt_num(layout.legend_x),
        fmt_num(layout.legend_y)
    );
    let mut group = BytesStart::new("g");
    group.push_attribute(("transform", translate.as_str()));
    writer.write_event(Event::Start(group)).map_err(xml_error)?;
    for event in children {
        writer.write_event(event.clone()).map_err(xml_error)?;
    }
    writer.write_event(Event::End(BytesEnd::new("g"))).map_err(xml_error)?;
    Ok(())
}

fn fmt_num(v: f32) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_children_skip_prolog_and_comments() {
        let svg = "<?xml version=\"1.0\"?><!-- <svg> -->\
                   <svg><g><rect/></g><text>a &amp; b</text></svg>";
        let children = root_children(svg).unwrap();
        assert_eq!(children.len(), 6);
        assert!(matches!(&children[0], Event::Start(e) if e.name().as_ref() == b"g"));
    }

    #[test]
    fn self_closing_legend_has_no_children() {
        assert!(root_children("<svg width=\"1\" height=\"1\"/>").unwrap().is_empty());
    }

    #[test]
    fn resized_root_keeps_other_attributes() {
        let layout = MergeLayout {
            width: 30.0,
            height: 40.5,
            legend_x: 0.0,
            legend_y: 0.0,
        };
        let e = BytesStart::from_content(r#"svg stroke-width="2" width="10" height='20'"#, 3);
        let root = resized_root(&e, &layout).unwrap();
        let attrs: Vec<(Vec<u8>, Vec<u8>)> = root
            .attributes()
            .map(|a| {
                let a = a.unwrap();
                (a.key.as_ref().to_vec(), a.value.to_vec())
            })
            .collect();
        assert_eq!(
            attrs,
            vec![
                (b"stroke-width".to_vec(), b"2".to_vec()),
                (b"width".to_vec(), b"30".to_vec()),
                (b"height".to_vec(), b"40.5".to_vec()),
            ]
        );
    }
}
