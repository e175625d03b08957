use hexstrip_core::display::to_framebuffer;
use hexstrip_core::Tile;
use log::info;
use minifb::{Key, ScaleMode, Window, WindowOptions};
use std::time::Duration;

/// Show `image` in a resizable window until it is closed or Escape is pressed.
pub fn show(image: &Tile, title: &str) -> anyhow::Result<()> {
    let width = image.width() as usize;
    let height = image.height() as usize;
    let buffer = to_framebuffer(image);

    let mut window = Window::new(
        title,
        width,
        height,
        WindowOptions {
            resize: true,
            scale_mode: ScaleMode::AspectRatioStretch,
            ..WindowOptions::default()
        },
    )?;
    info!("Showing {}x{} strip, press Escape to close", width, height);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        window.update_with_buffer(&buffer, width, height)?;
        // Static image, ~60 Hz is plenty for event handling
        std::thread::sleep(Duration::from_millis(16));
    }
    Ok(())
}
