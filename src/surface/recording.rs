use crate::domain::color::{Hsla, Rgba};

use super::{CompositeMode, DrawSurface, DrawTarget, Filter, Point, Rect};

/// One call made against a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    FillRect(Rect, Rgba),
    StrokeLine {
        from: Point,
        to: Point,
        width: f32,
        color: Hsla,
    },
    Save,
    Restore,
    SetCompositeMode(CompositeMode),
    SetFilter(Option<Filter>),
    DrawSelfOnto(DrawTarget),
}

/// In-memory surface that records every call instead of rasterizing.
///
/// Used to drive the engine without a browser and to check the per-frame
/// draw order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
    depth: usize,
    unbalanced_restores: usize,
    recording: bool,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            depth: 0,
            unbalanced_restores: 0,
            recording: true,
        }
    }

    /// Keep track of state depth but drop the command log (long runs).
    pub fn without_log(mut self) -> Self {
        self.recording = false;
        self
    }

    pub fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeLine { .. }))
            .count()
    }

    /// Every `save` has been matched by a `restore`, and no extra restores.
    pub fn is_balanced(&self) -> bool {
        self.depth == 0 && self.unbalanced_restores == 0
    }

    fn push(&mut self, command: DrawCommand) {
        if self.recording {
            self.commands.push(command);
        }
    }
}

impl DrawSurface for RecordingSurface {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, rect: Rect) {
        self.push(DrawCommand::Clear(rect));
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.push(DrawCommand::FillRect(rect, color));
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Hsla) {
        self.push(DrawCommand::StrokeLine { from, to, width, color });
    }

    fn save(&mut self) {
        self.depth += 1;
        self.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        if self.depth == 0 {
            self.unbalanced_restores += 1;
        } else {
            self.depth -= 1;
        }
        self.push(DrawCommand::Restore);
    }

    fn set_composite_mode(&mut self, mode: CompositeMode) {
        self.push(DrawCommand::SetCompositeMode(mode));
    }

    fn set_filter(&mut self, filter: Option<Filter>) {
        self.push(DrawCommand::SetFilter(filter));
    }

    fn draw_self_onto(&mut self, target: DrawTarget) {
        self.push(DrawCommand::DrawSelfOnto(target));
    }
}
