use eframe_gridlines::state::LineEditorPatch;
use eframe_gridlines::{
    ColorHue, Command, CommandError, EditorContext, Endpoint, LinePatch, LineWidth, Opacity, Position,
};

/// Image with lines 0-1, 1-2, 2-3 along the x axis.
fn editor_with_three_lines() -> EditorContext {
    let mut ctx = EditorContext::new();
    for x in 0..=3 {
        ctx.dispatch(Command::ClickPosition(Position::new(x, 0))).unwrap();
    }
    ctx.dispatch(Command::ClearActivePosition).unwrap();
    ctx
}

fn starts(ctx: &EditorContext) -> Vec<i32> {
    ctx.lines().iter().map(|line| line.start.x).collect()
}

fn past_len(ctx: &EditorContext) -> usize {
    ctx.current_image().unwrap().history.past().len()
}

#[test]
fn test_move_line() {
    let mut ctx = editor_with_three_lines();
    let past = past_len(&ctx);

    ctx.dispatch(Command::MoveLine { old_index: 0, new_index: 2 }).unwrap();
    assert_eq!(starts(&ctx), vec![1, 2, 0]);
    assert_eq!(past_len(&ctx), past + 1);

    ctx.dispatch(Command::MoveLine { old_index: 2, new_index: 1 }).unwrap();
    assert_eq!(starts(&ctx), vec![1, 0, 2]);

    ctx.dispatch(Command::Undo).unwrap();
    assert_eq!(starts(&ctx), vec![1, 2, 0]);
}

#[test]
fn test_move_line_clamps_target() {
    let mut ctx = editor_with_three_lines();
    ctx.dispatch(Command::MoveLine { old_index: 0, new_index: 99 }).unwrap();
    assert_eq!(starts(&ctx), vec![1, 2, 0]);
}

#[test]
fn test_move_line_out_of_range_is_noop() {
    let mut ctx = editor_with_three_lines();
    let before = ctx.state().clone();

    assert_eq!(
        ctx.dispatch(Command::MoveLine { old_index: 3, new_index: 0 }),
        Err(CommandError::LineIndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(ctx.state(), &before);
}

#[test]
fn test_delete_line() {
    let mut ctx = editor_with_three_lines();
    ctx.dispatch(Command::DeleteLine(1)).unwrap();
    assert_eq!(starts(&ctx), vec![0, 2]);

    ctx.dispatch(Command::Undo).unwrap();
    assert_eq!(starts(&ctx), vec![0, 1, 2]);
}

#[test]
fn test_delete_line_out_of_range_is_noop() {
    let mut ctx = editor_with_three_lines();
    let before = ctx.state().clone();
    assert!(ctx.dispatch(Command::DeleteLine(10)).is_err());
    assert_eq!(ctx.state(), &before);
}

#[test]
fn test_edit_line_merges_attributes() {
    let mut ctx = editor_with_three_lines();
    ctx.dispatch(Command::EditLine {
        index: 2,
        patch: LinePatch {
            color: Some(ColorHue::Blue),
            width: Some(LineWidth::new(6)),
            opacity: Some(Opacity::from_tenths(9)),
            ..Default::default()
        },
    })
    .unwrap();

    let line = ctx.lines()[2];
    assert_eq!(line.color, ColorHue::Blue);
    assert_eq!(line.width.get(), 6);
    assert_eq!(line.opacity.tenths(), 9);
    assert_eq!(line.start, Position::new(2, 0));
    assert_eq!(line.end, Position::new(3, 0));
    // Neighbours untouched
    assert_eq!(ctx.lines()[1].color, ColorHue::Gray);
}

#[test]
fn test_edit_line_out_of_range_is_noop() {
    let mut ctx = editor_with_three_lines();
    let before = ctx.state().clone();
    assert_eq!(
        ctx.dispatch(Command::EditLine { index: 3, patch: LinePatch::default() }),
        Err(CommandError::LineIndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(ctx.state(), &before);
}

#[test]
fn test_line_editor_patch_is_not_undoable() {
    let mut ctx = editor_with_three_lines();
    let past = past_len(&ctx);

    ctx.dispatch(Command::SetLineEditor(LineEditorPatch {
        is_open: Some(true),
        active_index: Some(Some(1)),
        hover_endpoint: Some(Endpoint::End),
    }))
    .unwrap();

    let editor = ctx.line_editor();
    assert!(editor.is_open);
    assert_eq!(editor.active_index, Some(1));
    assert_eq!(editor.hover_endpoint, Endpoint::End);
    assert!(!editor.is_editing_endpoint());
    assert_eq!(past_len(&ctx), past);
}

#[test]
fn test_hover_highlight_does_not_redirect_clicks() {
    let mut ctx = editor_with_three_lines();
    ctx.dispatch(Command::SetLineEditor(LineEditorPatch {
        active_index: Some(Some(0)),
        ..Default::default()
    }))
    .unwrap();

    ctx.dispatch(Command::ClickPosition(Position::new(5, 5))).unwrap();
    assert_eq!(ctx.active_position(), Some(Position::new(5, 5)));
    assert_eq!(ctx.lines()[0].start, Position::new(0, 0));
}
