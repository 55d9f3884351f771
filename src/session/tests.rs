// src/session/tests.rs

//! Unit tests for `DrawingSession` input handling.

use super::*;
use crate::config::{CanvasConfig, Config};
use test_log::test;

// --- Test Helpers ---

const BG: Rgb = Rgb(0xAAAAAA);

fn new_session() -> DrawingSession {
    let config = Config {
        canvas: CanvasConfig {
            width: 120,
            height: 80,
            clear_color: BG,
        },
        ..Config::default()
    };
    DrawingSession::new(&config)
}

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

fn click(session: &mut DrawingSession, button: MouseButton, at: Point) {
    session.interpret_input(SessionInput::Press { button, point: at });
    session.interpret_input(SessionInput::Release { button, point: at });
}

fn stroke(session: &mut DrawingSession, from: Point, to: Point) -> Option<SessionAction> {
    session.interpret_input(SessionInput::Press {
        button: MouseButton::Primary,
        point: from,
    });
    session.interpret_input(SessionInput::Drag { point: to });
    session.interpret_input(SessionInput::Release {
        button: MouseButton::Primary,
        point: to,
    })
}

fn segments(session: &DrawingSession, style: LineStyle) -> Vec<(Point, Point)> {
    let canvas = session.canvas();
    let lines = match style {
        LineStyle::Solid => canvas.lines(),
        LineStyle::Dotted => canvas.dotted_lines(),
    };
    lines
        .iter()
        .map(|l| {
            let s = canvas.segment(l);
            (s.start, s.end)
        })
        .collect()
}

fn count(session: &DrawingSession, color: Rgb) -> usize {
    session.buffer().pixels().iter().filter(|&&c| c == color).count()
}

// --- Defaults and settings ---

#[test]
fn test_new_session_defaults() {
    let session = DrawingSession::new(&Config::default());
    assert_eq!(session.tool(), ToolMode::Line);
    assert_eq!(session.color(), Rgb::BLUE);
    assert_eq!(session.brush_size(), 1);
    assert_eq!(session.buffer().width(), 1120);
    assert_eq!(session.buffer().height(), 600);
    assert_eq!(session.buffer().get_pixel(0, 0), Some(BG));
}

#[test]
fn test_brush_size_is_clamped() {
    let mut session = new_session();
    session.interpret_input(SessionInput::SetBrushSize(40));
    assert_eq!(session.brush_size(), 15);
    session.interpret_input(SessionInput::SetBrushSize(0));
    assert_eq!(session.brush_size(), 1);
}

#[test]
fn test_palette_and_packed_colors() {
    let mut session = new_session();
    session.interpret_input(SessionInput::SetPaletteColor(5));
    assert_eq!(session.color(), Rgb::RED);
    session.interpret_input(SessionInput::SetPaletteColor(25));
    assert_eq!(session.color(), Rgb::RED);
    session.interpret_input(SessionInput::SetColor(Rgb(0xFF00_FF00)));
    assert_eq!(session.color(), Rgb::GREEN);
}

// --- Free lines ---

#[test]
fn test_line_stroke_commits_on_release() {
    let mut session = new_session();
    session.interpret_input(SessionInput::SetColor(Rgb::RED));
    session.interpret_input(SessionInput::Press {
        button: MouseButton::Primary,
        point: p(10, 10),
    });
    // Drag previews but does not commit.
    let action = session.interpret_input(SessionInput::Drag { point: p(30, 10) });
    assert_eq!(action, Some(SessionAction::RequestRedraw));
    assert!(session.canvas().is_empty());
    assert_eq!(session.buffer().get_pixel(20, 10), Some(Rgb::RED));

    session.interpret_input(SessionInput::Release {
        button: MouseButton::Primary,
        point: p(40, 10),
    });
    assert_eq!(segments(&session, LineStyle::Solid), vec![(p(10, 10), p(40, 10))]);
    assert_eq!(count(&session, Rgb::RED), 31);
}

#[test]
fn test_shift_snaps_and_control_makes_dotted() {
    let mut session = new_session();
    session.interpret_input(SessionInput::KeyDown(KeySymbol::Shift));
    session.interpret_input(SessionInput::KeyDown(KeySymbol::Control));
    stroke(&mut session, p(0, 0), p(100, 10));

    assert!(session.canvas().lines().is_empty());
    assert_eq!(segments(&session, LineStyle::Dotted), vec![(p(0, 0), p(100, 0))]);

    session.interpret_input(SessionInput::KeyUp(KeySymbol::Shift));
    session.interpret_input(SessionInput::KeyUp(KeySymbol::Control));
    assert!(session.modifiers().is_empty());
    stroke(&mut session, p(0, 0), p(100, 10));
    assert_eq!(segments(&session, LineStyle::Solid), vec![(p(0, 0), p(100, 10))]);
}

#[test]
fn test_release_without_press_commits_nothing() {
    let mut session = new_session();
    let action = session.interpret_input(SessionInput::Release {
        button: MouseButton::Primary,
        point: p(5, 5),
    });
    assert_eq!(action, None);
    assert!(session.canvas().is_empty());
}

// --- Tool transitions ---

#[test]
fn test_keys_toggle_tools() {
    let mut session = new_session();
    session.interpret_input(SessionInput::KeyDown(KeySymbol::Char('f')));
    assert_eq!(session.tool(), ToolMode::Fill);
    session.interpret_input(SessionInput::KeyDown(KeySymbol::Char('r')));
    assert_eq!(session.tool(), ToolMode::Erase);
    session.interpret_input(SessionInput::KeyDown(KeySymbol::Char('r')));
    assert_eq!(session.tool(), ToolMode::Line);
    session.interpret_input(SessionInput::ToggleTool(ToolMode::Circle));
    assert_eq!(session.tool(), ToolMode::Circle);
}

// --- Polygons ---

#[test]
fn test_polygon_closing_line_is_replaced_per_vertex() {
    let mut session = new_session();
    session.interpret_input(SessionInput::KeyDown(KeySymbol::Char('p')));
    assert_eq!(session.tool(), ToolMode::Polygon);

    click(&mut session, MouseButton::Primary, p(10, 10));
    assert!(session.canvas().is_empty());
    click(&mut session, MouseButton::Primary, p(50, 10));
    assert_eq!(session.canvas().lines().len(), 1);
    click(&mut session, MouseButton::Primary, p(50, 50));
    // two edges + provisional closing line
    assert_eq!(
        segments(&session, LineStyle::Solid),
        vec![
            (p(10, 10), p(50, 10)),
            (p(50, 10), p(50, 50)),
            (p(50, 50), p(10, 10)),
        ]
    );
    click(&mut session, MouseButton::Primary, p(10, 50));
    assert_eq!(
        segments(&session, LineStyle::Solid),
        vec![
            (p(10, 10), p(50, 10)),
            (p(50, 10), p(50, 50)),
            (p(50, 50), p(10, 50)),
            (p(10, 50), p(10, 10)),
        ]
    );
    assert_eq!(session.polygon_vertices().len(), 4);

    // Leaving polygon mode keeps the closing line.
    session.interpret_input(SessionInput::ToggleTool(ToolMode::Polygon));
    assert_eq!(session.tool(), ToolMode::Line);
    assert_eq!(session.canvas().lines().len(), 4);
    assert!(session.polygon_vertices().is_empty());
}

#[test]
fn test_polygon_with_two_vertices_keeps_only_its_edge() {
    let mut session = new_session();
    session.interpret_input(SessionInput::ToggleTool(ToolMode::Polygon));
    click(&mut session, MouseButton::Primary, p(10, 10));
    click(&mut session, MouseButton::Primary, p(40, 10));
    session.interpret_input(SessionInput::ToggleTool(ToolMode::Fill));
    assert_eq!(segments(&session, LineStyle::Solid), vec![(p(10, 10), p(40, 10))]);
}

#[test]
fn test_polygon_vertex_snaps_to_previous() {
    let mut session = new_session();
    session.interpret_input(SessionInput::ToggleTool(ToolMode::Polygon));
    session.interpret_input(SessionInput::KeyDown(KeySymbol::Shift));
    click(&mut session, MouseButton::Primary, p(10, 10));
    click(&mut session, MouseButton::Primary, p(60, 14));
    assert_eq!(segments(&session, LineStyle::Solid), vec![(p(10, 10), p(60, 10))]);
}

#[test]
fn test_polygon_edges_share_vertices() {
    let mut session = new_session();
    session.interpret_input(SessionInput::ToggleTool(ToolMode::Polygon));
    for at in [p(10, 10), p(50, 10), p(50, 50)] {
        click(&mut session, MouseButton::Primary, at);
    }
    let lines = session.canvas().lines();
    assert_eq!(lines[0].end(), lines[1].start());
    assert_eq!(lines[1].end(), lines[2].start());
    assert_eq!(lines[2].end(), lines[0].start());
}

// --- Squares and circles ---

#[test]
fn test_square_commits_four_connected_edges() {
    let mut session = new_session();
    session.interpret_input(SessionInput::ToggleTool(ToolMode::Square));
    stroke(&mut session, p(30, 30), p(20, 36));
    assert_eq!(
        segments(&session, LineStyle::Solid),
        vec![
            (p(20, 30), p(30, 30)),
            (p(30, 30), p(30, 40)),
            (p(30, 40), p(20, 40)),
            (p(20, 40), p(20, 30)),
        ]
    );
    let lines = session.canvas().lines();
    assert_eq!(lines[3].end(), lines[0].start());
}

#[test]
fn test_circle_commits_polygon_approximation() {
    let mut session = new_session();
    session.interpret_input(SessionInput::ToggleTool(ToolMode::Circle));
    stroke(&mut session, p(60, 40), p(80, 40));

    let segs = segments(&session, LineStyle::Solid);
    assert_eq!(segs.len(), 36);
    assert_eq!(segs[0].0, p(80, 40));
    // 90 degrees: cos is ~6e-17, truncated to 0.
    assert_eq!(segs[9].0, p(60, 60));
    assert_eq!(segs[35].1, segs[0].0);
}

// --- Fill ---

#[test]
fn test_fill_is_recorded_and_survives_rerender() {
    let mut session = new_session();
    session.interpret_input(SessionInput::ToggleTool(ToolMode::Square));
    stroke(&mut session, p(10, 10), p(30, 30));

    session.interpret_input(SessionInput::ToggleTool(ToolMode::Fill));
    session.interpret_input(SessionInput::SetColor(Rgb::GREEN));
    session.interpret_input(SessionInput::Press {
        button: MouseButton::Primary,
        point: p(20, 20),
    });
    assert_eq!(session.fills().len(), 1);
    assert_eq!(session.fills()[0].points().len(), 19 * 19);
    let seen = session.buffer().clone();

    session.render();
    assert_eq!(session.buffer(), &seen);
}

#[test]
fn test_fill_with_same_color_records_nothing() {
    let mut session = new_session();
    session.interpret_input(SessionInput::ToggleTool(ToolMode::Fill));
    session.interpret_input(SessionInput::SetColor(BG));
    session.interpret_input(SessionInput::Press {
        button: MouseButton::Primary,
        point: p(5, 5),
    });
    assert!(session.fills().is_empty());
}

// --- Vertex dragging ---

#[test]
fn test_dragging_shared_vertex_moves_both_edges() {
    let mut session = new_session();
    session.interpret_input(SessionInput::ToggleTool(ToolMode::Square));
    stroke(&mut session, p(10, 10), p(30, 30));
    session.interpret_input(SessionInput::ToggleTool(ToolMode::Square));

    session.interpret_input(SessionInput::Press {
        button: MouseButton::Secondary,
        point: p(32, 12),
    });
    session.interpret_input(SessionInput::Drag { point: p(40, 5) });
    session.interpret_input(SessionInput::Release {
        button: MouseButton::Secondary,
        point: p(45, 2),
    });

    let segs = segments(&session, LineStyle::Solid);
    assert_eq!(segs[0], (p(10, 10), p(45, 2)));
    assert_eq!(segs[1], (p(45, 2), p(30, 30)));
    assert_eq!(session.buffer().get_pixel(45, 2), Some(Rgb::BLUE));
}

#[test]
fn test_secondary_press_far_from_vertices_grabs_nothing() {
    let mut session = new_session();
    stroke(&mut session, p(10, 10), p(60, 10));
    session.interpret_input(SessionInput::Press {
        button: MouseButton::Secondary,
        point: p(35, 30),
    });
    assert_eq!(session.interpret_input(SessionInput::Drag { point: p(0, 0) }), None);
    assert_eq!(segments(&session, LineStyle::Solid), vec![(p(10, 10), p(60, 10))]);
}

// --- Eraser ---

#[test]
fn test_eraser_splits_on_press_and_drag() {
    let mut session = new_session();
    stroke(&mut session, p(0, 40), p(100, 40));
    session.interpret_input(SessionInput::SetBrushSize(3));
    session.interpret_input(SessionInput::ToggleTool(ToolMode::Erase));

    let action = session.interpret_input(SessionInput::Press {
        button: MouseButton::Primary,
        point: p(50, 40),
    });
    assert_eq!(action, Some(SessionAction::RequestRedraw));
    assert_eq!(
        segments(&session, LineStyle::Solid),
        vec![(p(0, 40), p(47, 40)), (p(53, 40), p(100, 40))]
    );
    assert_eq!(session.buffer().get_pixel(50, 40), Some(BG));

    session.interpret_input(SessionInput::Drag { point: p(20, 41) });
    assert_eq!(session.canvas().lines().len(), 3);
}

#[test]
fn test_eraser_ignores_secondary_button() {
    let mut session = new_session();
    stroke(&mut session, p(0, 40), p(100, 40));
    session.interpret_input(SessionInput::ToggleTool(ToolMode::Erase));
    session.interpret_input(SessionInput::Press {
        button: MouseButton::Secondary,
        point: p(0, 40),
    });
    assert_eq!(session.canvas().lines().len(), 1);
}

// --- Clear ---

#[test]
fn test_clear_drops_everything() {
    let mut session = new_session();
    stroke(&mut session, p(0, 0), p(50, 50));
    session.interpret_input(SessionInput::ToggleTool(ToolMode::Fill));
    click(&mut session, MouseButton::Primary, p(60, 10));
    assert_eq!(session.fills().len(), 1);

    let action = session.interpret_input(SessionInput::KeyDown(KeySymbol::Char('c')));
    assert_eq!(action, Some(SessionAction::RequestRedraw));
    assert!(session.canvas().is_empty());
    assert!(session.fills().is_empty());
    assert!(session.buffer().pixels().iter().all(|&c| c == BG));
}
