//! Scripted walk through the color wheel interaction.
//!
//! There is no window: the script feeds taps and frame ticks to the host
//! screen and writes a PNG of the composited display list at each step.

use std::path::PathBuf;
use std::time::Duration;

use colorwheel_ui::prelude::*;
use colorwheel_ui::{point_at_angle, wedge_mid_angle, RenderError};
use web_time::Instant;

use crate::config::{AppConfig, ConfigError};
use crate::constants::SCREEN_BACKGROUND;
use crate::host::HostScreen;

/// Wedge the script picks on its first visit (yellow)
const FIRST_CHOICE: usize = 2;

/// Errors that can occur while running the demo.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to encode snapshot: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The screen did not react to a scripted step as expected
    #[error("Unexpected screen state: {0}")]
    UnexpectedState(&'static str),
}

struct Script {
    runtime: Runtime<HostScreen>,
    start: Instant,
    out_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl Script {
    fn at(&mut self, millis: u64) {
        self.runtime.tick(self.start + Duration::from_millis(millis));
    }

    fn tap(&mut self, position: Point) {
        self.runtime.dispatch(&Event::tap(position));
    }

    fn snapshot(&mut self, name: &str) -> Result<(), DemoError> {
        let size = self.runtime.viewport();
        let image = self.runtime.frame().rasterize(
            size.width.round() as u32,
            size.height.round() as u32,
            SCREEN_BACKGROUND,
        )?;
        self.save(name, &image)
    }

    fn save(&mut self, name: &str, image: &WheelImage) -> Result<(), DemoError> {
        let path = self.out_dir.join(format!("{}.png", name));
        image.save_png(&path)?;
        log::info!("Saved snapshot {:?}", path);
        self.written.push(path);
        Ok(())
    }

    fn check(&self, ok: bool, what: &'static str) -> Result<(), DemoError> {
        if ok {
            Ok(())
        } else {
            Err(DemoError::UnexpectedState(what))
        }
    }
}

/// Run the scripted interaction and return the snapshot paths in order.
pub fn run(config: &AppConfig) -> Result<Vec<PathBuf>, DemoError> {
    config.validate()?;
    let out_dir = config.snapshot_dir.clone();
    std::fs::create_dir_all(&out_dir)?;

    let host = HostScreen::new(config)?;
    let viewport = host.screen_size();
    let mut script = Script {
        runtime: Runtime::new(host, viewport),
        start: Instant::now(),
        out_dir,
        written: Vec::new(),
    };
    let appear = config.wheel.appear_ms;
    let dismiss = config.wheel.dismiss_ms;

    // Reference renders of the bare wheel
    save_reference(&mut script, config.wheel.size)?;

    script.at(0);
    script.snapshot("01-idle")?;

    let button = script.runtime.app().button_bounds().center();
    script.tap(button);
    script.check(script.runtime.app().is_wheel_open(), "wheel did not open")?;
    script.at(appear / 2);
    script.snapshot("02-opening")?;
    script.at(appear);
    script.snapshot("03-open")?;

    let wheel = script.runtime.app().wheel_bounds();
    let choice = WedgeIndex::new(FIRST_CHOICE).ok_or(DemoError::UnexpectedState("bad wedge"))?;
    let local = point_at_angle(wedge_mid_angle(choice), wheel.width / 3.0, wheel.size());
    script.tap(Point::new(wheel.x + local.x, wheel.y + local.y));
    script.check(
        script.runtime.app().swatch_color() == choice.color(),
        "tap did not choose a color",
    )?;
    script.at(appear + dismiss / 2);
    script.snapshot("04-dismissing")?;
    script.at(appear + dismiss);
    script.check(!script.runtime.app().is_wheel_open(), "wheel was not removed")?;
    script.snapshot("05-chosen")?;

    // Reopen: the previous choice is highlighted; then dismiss by tapping outside
    let reopened = appear + dismiss;
    script.tap(button);
    script.check(
        script.runtime.app().selection() == Some(choice),
        "selection was not restored",
    )?;
    script.at(reopened + appear);
    script.snapshot("06-reopened")?;
    script.tap(Point::new(viewport.width / 2.0, 10.0));
    script.check(script.runtime.app().is_dismissing(), "background tap ignored")?;
    script.at(reopened + appear + dismiss);
    script.snapshot("07-dismissed")?;

    log::info!(
        "Demo finished: {} snapshots in {:?}",
        script.written.len(),
        script.out_dir
    );
    Ok(script.written)
}

fn save_reference(script: &mut Script, size: f32) -> Result<(), DemoError> {
    let plain = render_wheel(size, false, None)?;
    script.save("wheel", &plain)?;
    let shadowed = render_wheel(size, true, Some(WedgeIndex::FIRST))?;
    script.save("wheel-shadow-selected", &shadowed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "colorwheel-demo-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_demo_writes_all_snapshots() {
        let mut config = AppConfig::default();
        config.wheel.size = 120.0;
        config.screen.width = 200.0;
        config.screen.height = 300.0;
        config.snapshot_dir = temp_dir("all");

        let written = run(&config).unwrap();
        assert_eq!(written.len(), 9);
        for path in &written {
            assert!(path.exists(), "{:?} missing", path);
        }

        let idle = ::image::open(config.snapshot_dir.join("01-idle.png"))
            .unwrap()
            .to_rgba8();
        assert_eq!(idle.dimensions(), (200, 300));
        let _ = std::fs::remove_dir_all(&config.snapshot_dir);
    }

    #[test]
    fn test_demo_rejects_invalid_config() {
        let mut config = AppConfig::default();
        config.wheel.size = 0.0;
        config.snapshot_dir = temp_dir("invalid");
        assert!(matches!(
            run(&config),
            Err(DemoError::Config(ConfigError::Invalid(_)))
        ));
    }
}
