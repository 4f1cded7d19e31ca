//! Game scene drawing: player sprite, meteorites, explosion

use super::{Color, Renderer, palette};
use crate::consts::{EXPLOSION_RADII, PLAYER_RADIUS};
use crate::sim::{GameSession, Meteorite, MeteoritePhase, Player};

/// Explosion colors, brightest (smallest ring) first
pub const EXPLOSION_COLORS: [Color; 3] = [palette::TOMATO, palette::RED, palette::DARKRED];

/// Player body with a face
pub fn draw_player(renderer: &mut dyn Renderer, player: &Player) {
    let (x, y) = player.anchor();
    renderer.fill_circle(x, y, PLAYER_RADIUS, palette::YELLOWGREEN);
    renderer.draw_pixel(x - 2, y - 3, palette::BLUEVIOLET);
    renderer.draw_pixel(x + 2, y - 3, palette::BLUEVIOLET);
    renderer.draw_line(x - 3, y + 2, x + 4, y + 2, palette::BLUEVIOLET);
    renderer.draw_circle(x, y, PLAYER_RADIUS, palette::BLUEVIOLET);
}

/// Three stacked discs, darkest offset up-right behind the face
pub fn draw_meteorite(renderer: &mut dyn Renderer, meteorite: &Meteorite) {
    let (x, y, r) = (meteorite.x, meteorite.y as i32, meteorite.radius);
    renderer.fill_circle(x + 2, y - 2, r, palette::BLACK);
    renderer.fill_circle(x + 1, y - 1, r, palette::DARKSLATEGRAY);
    renderer.fill_circle(x, y, r, palette::LIGHTSLATEGRAY);
}

/// One full frame: background, player, every meteorite currently falling
pub fn draw_frame(renderer: &mut dyn Renderer, session: &GameSession, background: Color) {
    renderer.clear(background);
    draw_player(renderer, &session.player);
    for meteorite in &session.meteorites {
        if meteorite.phase() == MeteoritePhase::Falling {
            draw_meteorite(renderer, meteorite);
        }
    }
    renderer.present();
}

/// Explosion ring `stage` (0..3) centred on the player
pub fn draw_explosion_stage(renderer: &mut dyn Renderer, player: &Player, stage: usize) {
    let stage = stage.min(EXPLOSION_RADII.len() - 1);
    let (x, y) = player.anchor();
    renderer.fill_circle(x, y, EXPLOSION_RADII[stage], EXPLOSION_COLORS[stage]);
    renderer.present();
}
