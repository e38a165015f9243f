//! Display task
//!
//! Keeps the drawing layer's own copy of the face and redraws the terminal
//! canvas whenever it changes.

use std::io::Write;

use log::{info, trace, warn};

use meridian_display::{FaceRenderer, FaceView};

use crate::canvas::TextCanvas;
use crate::channels::FACE_UPDATE;
use crate::config::CanvasConfig;

/// ANSI: cursor home, clear screen
const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

/// Display task - renders every face update
#[embassy_executor::task]
pub async fn display_task(canvas_config: CanvasConfig, render: bool) {
    info!("Display task started");

    let mut view = FaceView::new();
    let mut canvas = TextCanvas::new(&canvas_config);
    let renderer = FaceRenderer::new();

    loop {
        view.update(FACE_UPDATE.wait().await);

        let Some(face) = view.take_dirty() else {
            trace!("Face unchanged, skipping redraw");
            continue;
        };

        if let Err(never) = renderer.draw(&face, &mut canvas) {
            match never {}
        }

        trace!(
            "Drew face: hour={} minute={} (update {})",
            face.hour_hand.angle,
            face.minute_hand.angle,
            view.updates()
        );

        if render {
            let mut stdout = std::io::stdout().lock();
            let result = write!(stdout, "{}{}", CLEAR_SCREEN, canvas.to_text())
                .and_then(|_| stdout.flush());
            if let Err(e) = result {
                warn!("Failed to write frame: {}", e);
            }
        }
    }
}
