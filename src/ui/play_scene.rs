//! In-flight rendering: the logical 500x550 surface drawn on a half-block
//! canvas, plus the score HUD and status bar.

use super::game_common::{create_screen_layout, render_status_bar};
use super::TITLE;
use flappy_rocket::world::types::Aabb;
use flappy_rocket::World;
use ratatui::{
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::canvas::{Canvas, Context, Line as CanvasLine, Points},
    Frame,
};

const SPACE: Color = Color::Rgb(8, 10, 30);
const STAR: Color = Color::Rgb(150, 150, 190);
const METEOR: Color = Color::Rgb(140, 95, 60);
const METEOR_EDGE: Color = Color::Rgb(95, 60, 35);
const ROCKET: Color = Color::Rgb(235, 235, 240);
const FLAME: Color = Color::Rgb(255, 140, 40);

const STAR_COUNT: usize = 40;

/// Render one frame of the running session.
pub fn render_play(frame: &mut Frame, world: &World) {
    let area = frame.size();
    let layout = create_screen_layout(frame, area, TITLE, Color::Cyan);

    let width = world.config.screen_width;
    let height = world.config.screen_height;
    // One vertical line per terminal column keeps filled shapes solid
    let column_step = width / layout.content.width.max(1) as f64;
    let stars = star_field(width, height);

    let canvas = Canvas::default()
        .background_color(SPACE)
        .marker(Marker::HalfBlock)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &stars,
                color: STAR,
            });
            ctx.layer();

            for obstacle in &world.obstacles {
                for bounds in [
                    obstacle.top_bounds(&world.config),
                    obstacle.bottom_bounds(&world.config),
                ] {
                    fill_rect(ctx, &bounds, width, height, column_step, METEOR);
                    let edge = Aabb::new(bounds.x, bounds.y, column_step, bounds.height);
                    fill_rect(ctx, &edge, width, height, column_step, METEOR_EDGE);
                }
            }

            let rocket = world.player.bounds();
            fill_rect(ctx, &rocket, width, height, column_step, ROCKET);
            let flame = Aabb::new(rocket.x, rocket.y, column_step * 2.0, rocket.height);
            fill_rect(ctx, &flame, width, height, column_step, FLAME);
            ctx.layer();

            // HUD: score at the top centre
            ctx.print(
                width / 2.0,
                height - 25.0,
                Span::styled(
                    world.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .bg(SPACE)
                        .add_modifier(Modifier::BOLD),
                ),
            );
        });
    frame.render_widget(canvas, layout.content);

    let status = format!(
        "Score: {}   Speed: x{:.2}",
        world.score,
        world.speed / world.config.base_speed
    );
    render_status_bar(
        frame,
        layout.status_bar,
        &status,
        Color::Yellow,
        &[("[Space/Enter/Up]", "Flap"), ("[Esc]", "Abort")],
    );
}

/// Fill a world-space box, clipped to the surface. World y grows downward,
/// canvas y grows upward.
fn fill_rect(
    ctx: &mut Context,
    bounds: &Aabb,
    width: f64,
    height: f64,
    step: f64,
    color: Color,
) {
    let Some((left, right, top, bottom)) = clip(bounds, width, height) else {
        return;
    };
    let step = step.max(f64::EPSILON);
    let (canvas_top, canvas_bottom) = (height - top, height - bottom);

    let mut x = left;
    while x <= right {
        ctx.draw(&CanvasLine {
            x1: x,
            y1: canvas_bottom,
            x2: x,
            y2: canvas_top,
            color,
        });
        x += step;
    }
}

/// Visible part of `bounds` as (left, right, top, bottom), or `None` when the
/// box lies entirely off the surface.
fn clip(bounds: &Aabb, width: f64, height: f64) -> Option<(f64, f64, f64, f64)> {
    let left = bounds.x.max(0.0);
    let right = bounds.right().min(width);
    let top = bounds.y.max(0.0);
    let bottom = bounds.bottom().min(height);
    if left >= right || top >= bottom {
        return None;
    }
    Some((left, right, top, bottom))
}

/// Fixed, evenly scattered background stars.
fn star_field(width: f64, height: f64) -> Vec<(f64, f64)> {
    (0..STAR_COUNT)
        .map(|i| {
            let x = (i * 97 % 500) as f64 / 500.0 * width;
            let y = (i * 61 % 550) as f64 / 550.0 * height;
            (x, y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_inside() {
        let b = Aabb::new(10.0, 20.0, 70.0, 70.0);
        assert_eq!(clip(&b, 500.0, 550.0), Some((10.0, 80.0, 20.0, 90.0)));
    }

    #[test]
    fn test_clip_partially_above_surface() {
        // Top barrier boxes start far above the surface
        let b = Aabb::new(300.0, -350.0, 70.0, 500.0);
        assert_eq!(clip(&b, 500.0, 550.0), Some((300.0, 370.0, 0.0, 150.0)));
    }

    #[test]
    fn test_clip_offscreen() {
        assert_eq!(clip(&Aabb::new(800.0, 0.0, 70.0, 70.0), 500.0, 550.0), None);
        assert_eq!(clip(&Aabb::new(100.0, 600.0, 70.0, 70.0), 500.0, 550.0), None);
        assert_eq!(clip(&Aabb::new(-80.0, 0.0, 70.0, 70.0), 500.0, 550.0), None);
    }

    #[test]
    fn test_star_field_within_surface() {
        let stars = star_field(500.0, 550.0);
        assert_eq!(stars.len(), STAR_COUNT);
        assert!(stars
            .iter()
            .all(|&(x, y)| (0.0..=500.0).contains(&x) && (0.0..=550.0).contains(&y)));
    }
}
