use eframe_gridlines::command::UNDO_LIMIT;
use eframe_gridlines::{Command, CommandError, EditorContext, LinePatch, Position};

fn click(ctx: &mut EditorContext, x: i32, y: i32) {
    ctx.dispatch(Command::ClickPosition(Position::new(x, y))).unwrap();
}

fn past_len(ctx: &EditorContext) -> usize {
    ctx.current_image().unwrap().history.past().len()
}

fn future_len(ctx: &EditorContext) -> usize {
    ctx.current_image().unwrap().history.future().len()
}

#[test]
fn test_fresh_image_cannot_undo_or_redo() {
    let mut ctx = EditorContext::new();
    assert!(!ctx.can_undo());
    assert!(!ctx.can_redo());

    let before = ctx.state().clone();
    assert_eq!(ctx.dispatch(Command::Undo), Err(CommandError::NothingToUndo));
    assert_eq!(ctx.dispatch(Command::Redo), Err(CommandError::NothingToRedo));
    assert_eq!(ctx.state(), &before);
}

#[test]
fn test_past_grows_with_each_mutation() {
    let mut ctx = EditorContext::new();
    for n in 1..=30 {
        click(&mut ctx, n, n % 3);
        assert_eq!(past_len(&ctx), n as usize);
        assert_eq!(future_len(&ctx), 0);
    }
}

#[test]
fn test_past_is_capped() {
    let mut ctx = EditorContext::new();
    for n in 0..(UNDO_LIMIT as i32 + 50) {
        click(&mut ctx, n, 0);
    }
    assert_eq!(past_len(&ctx), UNDO_LIMIT);
    assert_eq!(future_len(&ctx), 0);
}

#[test]
fn test_undo_then_redo_restores_present() {
    let mut ctx = EditorContext::new();
    click(&mut ctx, 0, 0);
    click(&mut ctx, 3, 0);
    click(&mut ctx, 3, 3);
    let present = ctx.current_image().unwrap().present().clone();

    ctx.dispatch(Command::Undo).unwrap();
    assert_ne!(ctx.current_image().unwrap().present(), &present);
    assert_eq!(ctx.lines().len(), 1);
    assert_eq!(ctx.active_position(), Some(Position::new(3, 0)));
    assert!(ctx.can_redo());

    ctx.dispatch(Command::Redo).unwrap();
    assert_eq!(ctx.current_image().unwrap().present(), &present);
    assert!(!ctx.can_redo());
}

#[test]
fn test_undo_moves_present_to_front_of_future() {
    let mut ctx = EditorContext::new();
    click(&mut ctx, 0, 0);
    click(&mut ctx, 1, 0);
    click(&mut ctx, 2, 0);

    ctx.dispatch(Command::Undo).unwrap();
    ctx.dispatch(Command::Undo).unwrap();

    let history = &ctx.current_image().unwrap().history;
    assert_eq!(history.past().len(), 1);
    assert_eq!(history.future().len(), 2);
    // Nearest future first
    assert_eq!(history.future()[0].lines.len(), 1);
    assert_eq!(history.future()[1].lines.len(), 2);
}

#[test]
fn test_new_edit_invalidates_redo() {
    let mut ctx = EditorContext::new();
    click(&mut ctx, 0, 0);
    click(&mut ctx, 1, 0);
    ctx.dispatch(Command::Undo).unwrap();
    assert!(ctx.can_redo());

    ctx.dispatch(Command::EditLine { index: 0, patch: LinePatch::default() })
        .expect_err("undo removed the only line");
    assert!(ctx.can_redo(), "a rejected command keeps the redo stack");

    click(&mut ctx, 5, 5);
    assert!(!ctx.can_redo());
}

#[test]
fn test_histories_are_per_image() {
    let mut ctx = EditorContext::new();
    click(&mut ctx, 0, 0);
    let first = ctx.current_image_id().cloned().unwrap();

    ctx.dispatch(Command::AddImage).unwrap();
    assert!(!ctx.can_undo());

    ctx.dispatch(Command::SelectImage(first)).unwrap();
    assert!(ctx.can_undo());
}

#[test]
fn test_options_are_not_undoable() {
    let mut ctx = EditorContext::new();
    ctx.dispatch(Command::SetCanvasOption(eframe_gridlines::state::CanvasOptionsPatch {
        grid_size: Some(20),
        ..Default::default()
    }))
    .unwrap();
    assert!(!ctx.can_undo());
    assert_eq!(ctx.canvas_options().grid_size, 20);
}
