//! Post-run stats screen

use crate::renderer::{Color, Renderer, palette};
use crate::sim::SessionResult;

/// "label: value" lines for the stats screen
pub fn stats_lines(result: &SessionResult) -> [(&'static str, String); 2] {
    [
        ("Time Survived", format!("{:.3}", result.elapsed_secs())),
        ("Total Meteorites", result.objects_survived.to_string()),
    ]
}

pub fn draw_stats(renderer: &mut dyn Renderer, result: &SessionResult, background: Color) {
    renderer.clear(background);
    renderer.write_at("Stats:", 130, 30, palette::GREEN);
    for (i, (label, value)) in stats_lines(result).iter().enumerate() {
        let y = 50 + 20 * i as i32;
        renderer.write_at(label, 10, y, palette::GREEN);
        renderer.write_at(value, 220, y, palette::WHITE);
    }
    renderer.present();
}
