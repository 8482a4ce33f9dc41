//! The interactive color wheel popup

use crate::bitmap::WheelImage;
use crate::callback::Callback;
use crate::canvas::Shadow;
use crate::color::Color;
use crate::event::{Event, MouseButton};
use crate::hit_test::hit_test;
use crate::layout::{Bounds, Size};
use crate::palette::WedgeIndex;
use crate::renderer::Renderer;
use crate::transition::Appearance;
use crate::widget::{EventResult, Widget};

const LAYER_SHADOW_OPACITY: f32 = 0.8;
const LAYER_SHADOW_RADIUS: f32 = 10.0;

/// Displays a rendered wheel and reports which wedge was tapped.
///
/// The widget never re-renders its bitmap; the owner does that when the
/// selection changes and hands in the new [`WheelImage`].
pub struct ColorWheel<M> {
    image: WheelImage,
    appearance: Appearance,
    interactive: bool,
    shadow: Shadow,
    on_select: Callback<(WedgeIndex, Color), M>,
}

impl<M> ColorWheel<M> {
    pub fn new(image: WheelImage) -> Self {
        Self {
            image,
            appearance: Appearance::SHOWN,
            interactive: true,
            shadow: Shadow::ambient(LAYER_SHADOW_RADIUS).opacity(LAYER_SHADOW_OPACITY),
            on_select: Callback::none(),
        }
    }

    /// Current transform and opacity, usually sampled from a transition
    pub fn appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    /// When false, presses pass through untouched
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn on_select(mut self, f: impl Fn((WedgeIndex, Color)) -> M + 'static) -> Self {
        self.on_select = Callback::new(f);
        self
    }
}

impl<M: 'static> Widget<M> for ColorWheel<M> {
    fn layout(&mut self, available: Size) -> Size {
        Size::new(
            (self.image.width() as f32).min(available.width),
            (self.image.height() as f32).min(available.height),
        )
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        log::trace!(
            "ColorWheel draw: bounds={:?}, opacity={:.2}",
            bounds,
            self.appearance.opacity
        );
        renderer.draw_image(
            &self.image,
            bounds,
            self.appearance.transform,
            self.appearance.opacity,
            Some(self.shadow),
        );
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> EventResult<M> {
        if !self.interactive {
            return EventResult::None;
        }
        match event {
            Event::MousePress {
                button: MouseButton::Left,
                position,
            } if bounds.contains(*position) => {
                let index = hit_test(bounds.to_local(*position), bounds.size());
                match self.on_select.call((index, index.color())) {
                    Some(msg) => EventResult::Message(msg),
                    None => EventResult::Redraw,
                }
            }
            _ => EventResult::None,
        }
    }
}

/// Create a color wheel showing `image`
pub fn color_wheel<M>(image: WheelImage) -> ColorWheel<M> {
    ColorWheel::new(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hit_test::{point_at_angle, wedge_mid_angle};
    use crate::layout::Point;
    use crate::renderer::DrawCommand;

    fn image() -> WheelImage {
        WheelImage::from_premultiplied(vec![0; 100 * 100 * 4], 100, 100).unwrap()
    }

    fn wheel() -> ColorWheel<(usize, Color)> {
        color_wheel(image()).on_select(|(index, color): (WedgeIndex, Color)| (index.get(), color))
    }

    #[test]
    fn test_press_selects_wedge_under_pointer() {
        let bounds = Bounds::new(50.0, 80.0, 100.0, 100.0);
        let mut w = wheel();
        let target = WedgeIndex::new(4).unwrap();
        let local = point_at_angle(wedge_mid_angle(target), 35.0, bounds.size());
        let p = Point::new(local.x + bounds.x, local.y + bounds.y);

        let result = w.on_event(&Event::tap(p), bounds);
        assert_eq!(result, EventResult::Message((4, target.color())));
    }

    #[test]
    fn test_press_outside_bounds_is_ignored() {
        let bounds = Bounds::new(50.0, 80.0, 100.0, 100.0);
        let mut w = wheel();
        assert_eq!(
            w.on_event(&Event::tap(Point::new(10.0, 10.0)), bounds),
            EventResult::None
        );
    }

    #[test]
    fn test_non_interactive_wheel_ignores_presses() {
        let bounds = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let mut w = wheel().interactive(false);
        assert_eq!(
            w.on_event(&Event::tap(Point::new(90.0, 50.0)), bounds),
            EventResult::None
        );
    }

    #[test]
    fn test_right_click_is_ignored() {
        let bounds = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let mut w = wheel();
        let event = Event::MousePress {
            button: MouseButton::Right,
            position: Point::new(90.0, 50.0),
        };
        assert_eq!(w.on_event(&event, bounds), EventResult::None);
    }

    #[test]
    fn test_draw_records_image_with_layer_shadow() {
        let w = wheel();
        let mut r = Renderer::new();
        let bounds = Bounds::new(0.0, 0.0, 100.0, 100.0);
        w.draw(&mut r, bounds);
        match r.commands() {
            [DrawCommand::DrawImage {
                shadow: Some(shadow),
                opacity,
                ..
            }] => {
                assert_eq!(*opacity, 1.0);
                assert_eq!(shadow.blur, 10.0);
                assert!((shadow.color.a - 0.8).abs() < 1e-6);
            }
            other => panic!("unexpected commands: {:?}", other),
        }
    }
}
