//! Serialisation of outlines as SVG elements.

use crate::outline::Outline;

/// Render an outline as an SVG `<polygon>` element, listing the
/// points in order.
pub fn polygon(outline: &Outline) -> String {
    let points = outline.points().iter()
        .map(|p| format!("{},{}", p.x(), p.y()))
        .collect::<Vec<_>>()
        .join(" ");
    format!(r#"<polygon points="{}" />"#, points)
}

/// Render an outline as a standalone SVG document whose view box
/// is the bounding rectangle of the outline.
pub fn document(outline: &Outline) -> String {
    let view_box = outline.bounds()
        .map(|b| format!(r#" viewBox="{} {} {} {}""#, b.x, b.y, b.width, b.height))
        .unwrap_or_default();
    format!(r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1"{}>{}</svg>"#,
            view_box, polygon(outline))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Tile;
    use crate::outline::{ OutlineConfig, Outliner };

    fn hexagon() -> Outline {
        let config = OutlineConfig { radius: 2., ..OutlineConfig::default() };
        Outliner::new(&config).unwrap().outline(vec![Tile::new(0, 0)]).unwrap()
    }

    #[test]
    fn test_polygon_preserves_order() {
        let outline = hexagon();
        let svg = polygon(&outline);
        assert!(svg.starts_with(r#"<polygon points=""#));
        let points = svg.split('"').nth(1).unwrap().split(' ').collect::<Vec<_>>();
        assert_eq!(points.len(), outline.len());
        for (s, p) in points.iter().zip(outline.points()) {
            assert_eq!(*s, format!("{},{}", p.x(), p.y()));
        }
    }

    #[test]
    fn test_document() {
        let svg = document(&hexagon());
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"viewBox="-1.73 -2 3.46 4""#));
        assert!(svg.ends_with("/></svg>"));
    }
}
