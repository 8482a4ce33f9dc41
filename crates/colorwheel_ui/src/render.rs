//! Color wheel rasterization.
//!
//! [`render_wheel`] is a pure function of its arguments: the same size,
//! shadow flag and selection always produce the same pixels.

use crate::bitmap::WheelImage;
use crate::canvas::{Canvas, LineJoin, Shadow, StrokeStyle};
use crate::color::Color;
use crate::error::{RenderError, Result};
use crate::palette::WedgeIndex;
use crate::wedge::{hole_radius, wedge_path, wheel_radius, WedgeSpan};

/// Width of the selection outline stroke
pub const OUTLINE_WIDTH: f32 = 10.0;

/// Blur radius of the shadow behind the selection outline
pub const OUTLINE_SHADOW_BLUR: f32 = 5.0;

/// Blur radius of the shadow behind a whole pre-shadowed wheel image
pub const IMAGE_SHADOW_BLUR: f32 = 2.0;

/// Geometry of a wheel without the pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelLayout {
    pub size: f32,
    pub radius: f32,
    pub hole_radius: f32,
    /// One span per palette entry, in palette order
    pub wedges: Vec<(WedgeIndex, WedgeSpan)>,
    /// Span of the selection outline, if any
    pub highlight: Option<WedgeSpan>,
}

/// Describe the wheel drawn on a `size` canvas.
pub fn wheel_layout(size: f32, selection: Option<WedgeIndex>) -> WheelLayout {
    WheelLayout {
        size,
        radius: wheel_radius(size),
        hole_radius: hole_radius(size),
        wedges: WedgeIndex::all().map(|i| (i, WedgeSpan::of(i))).collect(),
        highlight: selection.map(WedgeSpan::of),
    }
}

/// Draw one wedge onto `canvas`.
///
/// Filled wedges use `color` as a solid fill. Unfilled wedges are stroked as a
/// fat outline with round joins.
pub fn add_wedge(
    canvas: &mut Canvas,
    start_angle: f32,
    end_angle: f32,
    color: Color,
    size: f32,
    radius: f32,
    fill: bool,
) -> Result<()> {
    let path = wedge_path(start_angle, end_angle, size, radius);
    if fill {
        canvas.fill_path(&path, color)
    } else {
        canvas.stroke_path(
            &path,
            color,
            StrokeStyle::new(OUTLINE_WIDTH).join(LineJoin::Round),
        )
    }
}

/// Render the wheel as a `size` x `size` image.
///
/// With a `selection`, that wedge is outlined in [`Color::HIGHLIGHT`] over a
/// soft shadow. With `with_shadow`, the finished wheel is drawn once more
/// over an ambient shadow; that variant is meant for static button images.
pub fn render_wheel(
    size: f32,
    with_shadow: bool,
    selection: Option<WedgeIndex>,
) -> Result<WheelImage> {
    if !size.is_finite() || size <= 0.0 {
        return Err(RenderError::InvalidSize(size));
    }
    let side = size.round().max(1.0) as u32;
    let size = side as f32;
    let layout = wheel_layout(size, selection);

    let mut canvas = Canvas::new(side, side)?;
    for (index, span) in &layout.wedges {
        add_wedge(
            &mut canvas,
            span.start,
            span.end,
            index.color(),
            size,
            layout.radius,
            true,
        )?;
    }

    if let Some(span) = layout.highlight {
        canvas.with_shadow(Shadow::ambient(OUTLINE_SHADOW_BLUR), |layer| {
            add_wedge(
                layer,
                span.start,
                span.end,
                Color::HIGHLIGHT,
                size,
                layout.radius,
                false,
            )
        })?;
    }

    log::trace!(
        "Rendered {}px wheel, selection={:?}, shadow={}",
        side,
        selection.map(WedgeIndex::get),
        with_shadow
    );

    if !with_shadow {
        return Ok(canvas.into_image());
    }

    let mut shadowed = Canvas::new(side, side)?;
    shadowed.with_shadow(Shadow::ambient(IMAGE_SHADOW_BLUR), |layer| {
        layer.draw_canvas(&canvas, 1.0);
        Ok(())
    })?;
    Ok(shadowed.into_image())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Point;
    use crate::palette::{PALETTE, WEDGE_COUNT};
    use crate::wedge::{angle_step, polar};
    use std::f32::consts::TAU;

    /// Pixel at `angle` halfway across the ring
    fn ring_pixel(img: &WheelImage, angle: f32) -> [u8; 4] {
        let size = img.width() as f32;
        let mid = (wheel_radius(size) + hole_radius(size)) / 2.0;
        let p = polar(Point::new(size / 2.0, size / 2.0), mid, angle);
        img.pixel(p.x as u32, p.y as u32).unwrap()
    }

    #[test]
    fn test_rejects_invalid_sizes() {
        for size in [0.0, -5.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                render_wheel(size, false, None),
                Err(RenderError::InvalidSize(_))
            ));
        }
    }

    #[test]
    fn test_tiny_sizes_render_one_pixel() {
        for size in [0.4, 0.6] {
            let img = render_wheel(size, false, None).unwrap();
            assert_eq!((img.width(), img.height()), (1, 1));
        }
    }

    #[test]
    fn test_image_is_size_by_size() {
        let img = render_wheel(120.0, false, None).unwrap();
        assert_eq!((img.width(), img.height()), (120, 120));
    }

    #[test]
    fn test_layout_partitions_circle() {
        for size in [1.0, 60.0, 250.0] {
            let layout = wheel_layout(size, None);
            assert_eq!(layout.wedges.len(), WEDGE_COUNT);
            let total: f32 = layout.wedges.iter().map(|(_, s)| s.sweep()).sum();
            assert!((total - TAU).abs() < 1e-4);
            for (i, (index, span)) in layout.wedges.iter().enumerate() {
                assert_eq!(index.get(), i);
                assert!((span.sweep() - angle_step()).abs() < 1e-5);
            }
            assert!(layout.highlight.is_none());
        }
    }

    #[test]
    fn test_highlight_span_for_wedge_three() {
        let layout = wheel_layout(250.0, WedgeIndex::new(3));
        let span = layout.highlight.unwrap();
        assert_eq!(span.start, 3.0 * angle_step());
        assert_eq!(span.end, 4.0 * angle_step());
    }

    #[test]
    fn test_wedge_centers_have_palette_colors() {
        let img = render_wheel(250.0, false, None).unwrap();
        for index in WedgeIndex::all() {
            let expected = PALETTE[index.get()].to_rgba8();
            assert_eq!(ring_pixel(&img, WedgeSpan::of(index).mid()), expected, "wedge {}", index);
        }
    }

    #[test]
    fn test_hole_and_corners_are_transparent() {
        let img = render_wheel(250.0, false, None).unwrap();
        assert_eq!(img.pixel(125, 125).unwrap()[3], 0);
        assert_eq!(img.pixel(0, 0).unwrap()[3], 0);
        assert_eq!(img.pixel(249, 249).unwrap()[3], 0);
    }

    #[test]
    fn test_selection_outlines_selected_wedge() {
        let plain = render_wheel(250.0, false, None).unwrap();
        let selected = render_wheel(250.0, false, WedgeIndex::new(3)).unwrap();
        assert_ne!(plain, selected);

        // The outline runs along the wedge edges; its center stays the fill color
        let span = WedgeSpan::of(WedgeIndex::new(3).unwrap());
        assert_eq!(ring_pixel(&selected, span.mid()), PALETTE[3].to_rgba8());
        assert_eq!(ring_pixel(&selected, span.start), Color::HIGHLIGHT.to_rgba8());
        assert_eq!(ring_pixel(&selected, span.end), Color::HIGHLIGHT.to_rgba8());

        // Wedges far from the selection are unchanged
        let far = WedgeSpan::of(WedgeIndex::new(8).unwrap()).mid();
        assert_eq!(ring_pixel(&selected, far), ring_pixel(&plain, far));
    }

    #[test]
    fn test_render_is_idempotent() {
        for selection in [None, WedgeIndex::new(5)] {
            for shadow in [false, true] {
                let a = render_wheel(90.0, shadow, selection).unwrap();
                let b = render_wheel(90.0, shadow, selection).unwrap();
                assert_eq!(a.data(), b.data());
            }
        }
    }

    #[test]
    fn test_shadow_darkens_outside_the_rim() {
        let plain = render_wheel(100.0, false, None).unwrap();
        let shadowed = render_wheel(100.0, true, None).unwrap();
        // Just past the outer radius on the right
        let x = (50.0 + wheel_radius(100.0) + 1.0) as u32;
        assert_eq!(plain.pixel(x, 50).unwrap()[3], 0);
        assert!(shadowed.pixel(x, 50).unwrap()[3] > 0);
    }
}
