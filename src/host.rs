//! The screen hosting the color wheel.
//!
//! A trigger button spins the wheel up from its own position to the middle of
//! the screen. Picking a wedge updates the swatch and fades the wheel away;
//! so does pressing anywhere else.

use std::f32::consts::PI;
use std::time::Duration;

use colorwheel_ui::prelude::*;
use colorwheel_ui::{RenderError, Stack};
use web_time::Instant;

use crate::config::AppConfig;
use crate::constants::{BUTTON_BOTTOM_MARGIN, SWATCH_SIZE, SWATCH_SPACING};
use crate::message::Message;

/// Scale the wheel starts from when it appears
const APPEAR_SCALE: f32 = 0.1;

#[derive(Debug, Clone, Copy)]
enum Phase {
    Opening(Transition),
    Open,
    Closing(Transition),
}

/// The wheel while it is on screen
#[derive(Debug)]
struct LiveWheel {
    selection: WedgeIndex,
    image: WheelImage,
    phase: Phase,
}

impl LiveWheel {
    fn appearance(&self, now: Instant) -> Appearance {
        match self.phase {
            Phase::Opening(transition) | Phase::Closing(transition) => transition.sample(now),
            Phase::Open => Appearance::SHOWN,
        }
    }

    fn is_closing(&self) -> bool {
        matches!(self.phase, Phase::Closing(_))
    }
}

/// Host screen state: trigger button, color indicator and the optional wheel.
#[derive(Debug)]
pub struct HostScreen {
    screen: Bounds,
    wheel_size: f32,
    appear_duration: Duration,
    dismiss_duration: Duration,
    button_image: WheelImage,
    trigger_enabled: bool,
    swatch_color: Color,
    wheel: Option<LiveWheel>,
    /// Time of the latest tick; transitions start here
    clock: Instant,
}

impl HostScreen {
    pub fn new(config: &AppConfig) -> Result<Self, RenderError> {
        // The button shows the wheel in miniature, with a baked-in shadow
        let button_image = render_wheel(config.wheel.button_size, true, None)?;
        log::debug!(
            "Rendered trigger image {}x{}",
            button_image.width(),
            button_image.height()
        );
        Ok(Self {
            screen: Bounds::new(0.0, 0.0, config.screen.width, config.screen.height),
            wheel_size: config.wheel.size,
            appear_duration: config.wheel.appear_duration(),
            dismiss_duration: config.wheel.dismiss_duration(),
            button_image,
            trigger_enabled: true,
            swatch_color: Color::BLACK,
            wheel: None,
            clock: Instant::now(),
        })
    }

    pub fn screen_size(&self) -> Size {
        self.screen.size()
    }

    /// Trigger button, centered horizontally near the bottom
    pub fn button_bounds(&self) -> Bounds {
        let side = self.button_image.width() as f32;
        Bounds::new(
            (self.screen.width - side) / 2.0,
            self.screen.height - side - BUTTON_BOTTOM_MARGIN,
            side,
            side,
        )
    }

    /// Swatch, to the left of the button and vertically aligned with it
    pub fn swatch_bounds(&self) -> Bounds {
        let button = self.button_bounds();
        Bounds::new(
            button.x - SWATCH_SPACING - SWATCH_SIZE,
            button.center().y - SWATCH_SIZE / 2.0,
            SWATCH_SIZE,
            SWATCH_SIZE,
        )
    }

    /// Where the wheel sits once fully shown
    pub fn wheel_bounds(&self) -> Bounds {
        let side = self.wheel_size.round();
        Bounds::centered_in(self.screen, Size::square(side))
    }

    pub fn swatch_color(&self) -> Color {
        self.swatch_color
    }

    pub fn trigger_enabled(&self) -> bool {
        self.trigger_enabled
    }

    pub fn is_wheel_open(&self) -> bool {
        self.wheel.is_some()
    }

    pub fn is_dismissing(&self) -> bool {
        self.wheel.as_ref().is_some_and(LiveWheel::is_closing)
    }

    /// Selection of the live wheel, if any
    pub fn selection(&self) -> Option<WedgeIndex> {
        self.wheel.as_ref().map(|wheel| wheel.selection)
    }

    /// Current transform and opacity of the live wheel
    pub fn wheel_appearance(&self) -> Option<Appearance> {
        self.wheel.as_ref().map(|wheel| wheel.appearance(self.clock))
    }

    fn open_wheel(&mut self) {
        if !self.trigger_enabled || self.wheel.is_some() {
            log::debug!("Ignoring open request: wheel already up");
            return;
        }

        let selection = initial_selection(self.swatch_color);
        let image = match render_wheel(self.wheel_size, false, Some(selection)) {
            Ok(image) => image,
            Err(e) => {
                log::error!("Failed to render color wheel: {}", e);
                return;
            }
        };

        // Start centered over the button, shrunk and upside down
        let wheel = self.wheel_bounds();
        let button = self.button_bounds();
        let dy = button.y - wheel.y - (wheel.height - button.height) / 2.0;
        let hidden = Appearance::new(
            Transform::IDENTITY
                .translated(0.0, dy)
                .scaled(APPEAR_SCALE)
                .rotated(PI),
            0.0,
        );
        let transition = Transition::new(
            hidden,
            Appearance::SHOWN,
            self.appear_duration,
            self.clock,
        );

        self.trigger_enabled = false;
        self.wheel = Some(LiveWheel {
            selection,
            image,
            phase: Phase::Opening(transition),
        });
        log::info!("Opened color wheel with selection {}", selection);
    }

    fn choose(&mut self, index: WedgeIndex, color: Color) {
        let Some(wheel) = self.wheel.as_mut() else {
            return;
        };
        if wheel.is_closing() {
            log::debug!("Ignoring selection of {} while dismissing", index);
            return;
        }

        wheel.selection = index;
        match render_wheel(self.wheel_size, false, Some(index)) {
            Ok(image) => wheel.image = image,
            Err(e) => log::error!("Failed to re-render color wheel: {}", e),
        }
        self.swatch_color = color;
        log::info!("Chose color {}", index);
        self.dismiss();
    }

    fn dismiss(&mut self) {
        let now = self.clock;
        let duration = self.dismiss_duration;
        let Some(wheel) = self.wheel.as_mut() else {
            return;
        };
        if wheel.is_closing() {
            log::debug!("Already dismissing");
            return;
        }

        let from = wheel.appearance(now);
        let to = Appearance::new(from.transform, 0.0);
        wheel.phase = Phase::Closing(Transition::new(from, to, duration, now));
        log::debug!("Dismissing color wheel");
    }
}

impl Application for HostScreen {
    type Message = Message;

    fn update(&mut self, message: Message) {
        log::debug!("Update: {:?}", message);
        match message {
            Message::OpenWheel => self.open_wheel(),
            Message::ColorChosen(index, color) => self.choose(index, color),
            Message::BackgroundPressed | Message::DismissWheel => self.dismiss(),
        }
    }

    fn view(&self) -> Element<Message> {
        let mut layers: Stack<Message> = stack()
            .push(
                self.swatch_bounds(),
                color_swatch(self.swatch_color).size(Size::square(SWATCH_SIZE)),
            )
            .push(
                self.button_bounds(),
                button(self.button_image.clone())
                    .on_click(Message::OpenWheel)
                    .enabled(self.trigger_enabled),
            );

        if let Some(wheel) = &self.wheel {
            layers = layers
                .push(
                    self.wheel_bounds(),
                    color_wheel(wheel.image.clone())
                        .appearance(wheel.appearance(self.clock))
                        .interactive(!wheel.is_closing())
                        .on_select(|(index, color)| Message::ColorChosen(index, color)),
                )
                .on_background_press(Message::BackgroundPressed)
                .on_escape(Message::DismissWheel);
        }

        Element::new(layers)
    }

    fn tick(&mut self, now: Instant) {
        self.clock = now;
        let Some(wheel) = self.wheel.as_mut() else {
            return;
        };
        match wheel.phase {
            Phase::Opening(transition) if transition.is_finished(now) => {
                wheel.phase = Phase::Open;
                log::debug!("Color wheel fully shown");
            }
            Phase::Closing(transition) if transition.is_finished(now) => {
                self.wheel = None;
                self.trigger_enabled = true;
                log::debug!("Color wheel removed");
            }
            _ => {}
        }
    }
}
