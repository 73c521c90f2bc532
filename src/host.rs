//! Host collaborator traits and the identifier types they share.
//!
//! glint owns no window, buffer, annotation, or timer. The embedding
//! editor supplies all of them through three seams:
//!
//! - [`EditorOps`]: queryable and mutable editor state
//! - [`AnnotationSurface`]: positioned, colored, prioritized annotations
//! - [`FadeScheduler`]: a cancelable repeating-timer primitive
//!
//! Everything here is called synchronously from the host's single
//! execution context.

use glint_config::Color;
use std::ops::Range;
use std::time::Duration;

/// Identifies a buffer owned by the host editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferId(pub u64);

/// Identifies a window owned by the host editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub u64);

/// Identifies an annotation created through an [`AnnotationSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnnotationId(pub u64);

/// Identifies a repeating timer created through a [`FadeScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// A location in a host buffer, addressed by character offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub buffer: BufferId,
    pub offset: usize,
}

impl Position {
    pub const fn new(buffer: BufferId, offset: usize) -> Self {
        Self { buffer, offset }
    }
}

/// Priority assigned to every glint annotation. Hosts must sort higher
/// priorities above ordinary annotations.
pub const OVERLAY_PRIORITY: i32 = 100;

/// The visual shape of one overlay segment.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationShape {
    /// A one-character-wide colored cell at the annotation position.
    Cell {
        background: Color,
    },
    /// Zero-width end-of-line padding: one space-wide stripe per color,
    /// appended after the line end without occupying buffer text.
    Tail {
        backgrounds: Vec<Color>,
    },
}

/// A positioned, colored, prioritized visual annotation scoped to a window.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub window: WindowId,
    pub position: Position,
    pub priority: i32,
    pub shape: AnnotationShape,
}

/// Queryable and mutable editor state supplied by the host.
pub trait EditorOps {
    /// Current cursor position in the focused window.
    fn cursor(&self) -> Position;

    /// Currently focused window.
    fn focused_window(&self) -> WindowId;

    /// First visible buffer offset of `window` (its scroll start).
    fn window_start(&self, window: WindowId) -> usize;

    /// Number of character cells between `position` and the end of its
    /// visual line.
    fn cells_to_line_end(&self, position: Position) -> usize;

    /// Visible columns remaining in `window` after the end of the visual
    /// line containing `position`.
    fn remaining_width_after_line(&self, window: WindowId, position: Position) -> usize;

    /// Column of `position` within its visual line.
    fn column_of(&self, position: Position) -> usize;

    /// Ambient background color at `position`, when the host can sample
    /// one.
    fn background_at(&self, position: Position) -> Option<Color>;

    /// Themed fallback background used when sampling fails.
    fn default_background(&self) -> Color;

    /// Number of line boundaries between two offsets of `buffer`, counting
    /// at most `limit` so that large jumps stay cheap.
    fn count_lines_between(&self, buffer: BufferId, from: usize, to: usize, limit: usize)
    -> usize;

    /// Whether `buffer` still exists.
    fn buffer_exists(&self, buffer: BufferId) -> bool;

    /// Offsets currently accessible in `buffer` (the narrowed region, when
    /// the host supports narrowing).
    fn accessible_range(&self, buffer: BufferId) -> Range<usize>;

    /// Make every offset of `buffer` accessible again.
    fn widen(&mut self, buffer: BufferId);

    /// Move the cursor to `position`, focusing its buffer.
    fn jump_to(&mut self, position: Position);

    /// Declared mode tags of `buffer`, ancestor tags included.
    fn mode_tags(&self, buffer: BufferId) -> Vec<String>;

    /// Whether focus is currently in a non-editable prompt surface.
    fn prompt_active(&self) -> bool;

    /// Head of the host's own mark list. Observed for change detection
    /// only; glint never mutates the host list.
    fn mark_head(&self) -> Option<Position>;

    /// Show a user-visible informational message.
    fn notify(&mut self, message: &str);
}

/// Create, repaint, and destroy visual annotations.
pub trait AnnotationSurface {
    fn create(&mut self, annotation: Annotation) -> AnnotationId;
    fn update(&mut self, id: AnnotationId, annotation: Annotation);
    fn destroy(&mut self, id: AnnotationId);
}

/// Repeating-timer primitive supplied by the host.
///
/// After `delay`, the host must invoke [`crate::Glint::decay_tick`] once
/// per `interval` until the timer is canceled.
pub trait FadeScheduler {
    fn schedule(&mut self, delay: Duration, interval: Duration) -> TimerId;
    fn cancel(&mut self, timer: TimerId);
}

/// The full host surface, bundled for event handling calls.
pub struct HostContext<'a> {
    pub editor: &'a mut dyn EditorOps,
    pub surface: &'a mut dyn AnnotationSurface,
    pub scheduler: &'a mut dyn FadeScheduler,
}
