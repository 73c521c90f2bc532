//! Shared integration test helpers for glint.
//!
//! This module provides mock implementations of the host collaborator
//! traits so the engine can be exercised without a real editor:
//!
//! - [`MockEditor`]: string-backed buffers with real line math
//! - [`MockSurface`]: annotation store with create/update/destroy counts
//! - [`MockScheduler`]: records armed timers instead of firing them
//! - [`MockBus`]: records event subscriptions
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{MockEditor, MockSurface, MockScheduler, BUF, WIN};
//! ```
//!
//! Note: Rust integration tests use `mod common;` (not `use`) to bring in
//! helpers from `tests/common/mod.rs`. The `#[allow(dead_code)]` attributes
//! suppress warnings when only a subset of helpers are used per file.

#![allow(dead_code)]

use glint::events::{EventBus, EventKind};
use glint::host::{
    Annotation, AnnotationId, AnnotationSurface, BufferId, EditorOps, FadeScheduler, Position,
    TimerId, WindowId,
};
use glint::Color;
use std::collections::{HashMap, HashSet};
use std::ops::Range;
use std::time::Duration;

/// Default buffer used by [`MockEditor::with_text`].
pub const BUF: BufferId = BufferId(1);

/// Default window used by [`MockEditor::with_text`].
pub const WIN: WindowId = WindowId(1);

/// A string-backed editor mock. Offsets are character offsets into the
/// buffer text, and line math counts real newlines.
pub struct MockEditor {
    pub buffers: HashMap<BufferId, String>,
    pub cursor: Position,
    pub focused: WindowId,
    pub window_starts: HashMap<WindowId, usize>,
    pub window_width: usize,
    pub narrowed: HashMap<BufferId, Range<usize>>,
    pub background: Option<Color>,
    pub default_background: Color,
    pub mode_tags: HashMap<BufferId, Vec<String>>,
    pub prompt_active: bool,
    pub mark_head: Option<Position>,
    pub messages: Vec<String>,
    pub jumps: Vec<Position>,
    pub widened: Vec<BufferId>,
}

impl MockEditor {
    /// An editor with one buffer ([`BUF`]) holding `text`, one focused
    /// window ([`WIN`]) 80 columns wide, cursor at offset 0.
    pub fn with_text(text: &str) -> Self {
        let mut buffers = HashMap::new();
        buffers.insert(BUF, text.to_string());
        let mut window_starts = HashMap::new();
        window_starts.insert(WIN, 0);
        Self {
            buffers,
            cursor: Position::new(BUF, 0),
            focused: WIN,
            window_starts,
            window_width: 80,
            narrowed: HashMap::new(),
            background: Some(Color::new(40, 42, 54)),
            default_background: Color::new(40, 42, 54),
            mode_tags: HashMap::new(),
            prompt_active: false,
            mark_head: None,
            messages: Vec::new(),
            jumps: Vec::new(),
            widened: Vec::new(),
        }
    }

    /// Add a second buffer with its own text.
    pub fn add_buffer(&mut self, buffer: BufferId, text: &str) {
        self.buffers.insert(buffer, text.to_string());
    }

    /// Move the cursor within the current buffer.
    pub fn move_cursor_to(&mut self, offset: usize) {
        self.cursor = Position::new(self.cursor.buffer, offset);
    }

    fn chars(&self, buffer: BufferId) -> Vec<char> {
        self.buffers
            .get(&buffer)
            .map(|text| text.chars().collect())
            .unwrap_or_default()
    }
}

impl EditorOps for MockEditor {
    fn cursor(&self) -> Position {
        self.cursor
    }

    fn focused_window(&self) -> WindowId {
        self.focused
    }

    fn window_start(&self, window: WindowId) -> usize {
        self.window_starts.get(&window).copied().unwrap_or(0)
    }

    fn cells_to_line_end(&self, position: Position) -> usize {
        let chars = self.chars(position.buffer);
        let start = position.offset.min(chars.len());
        chars[start..].iter().take_while(|c| **c != '\n').count()
    }

    fn remaining_width_after_line(&self, _window: WindowId, position: Position) -> usize {
        let line_len = self.column_of(position) + self.cells_to_line_end(position);
        self.window_width.saturating_sub(line_len)
    }

    fn column_of(&self, position: Position) -> usize {
        let chars = self.chars(position.buffer);
        let end = position.offset.min(chars.len());
        chars[..end].iter().rev().take_while(|c| **c != '\n').count()
    }

    fn background_at(&self, _position: Position) -> Option<Color> {
        self.background
    }

    fn default_background(&self) -> Color {
        self.default_background
    }

    fn count_lines_between(&self, buffer: BufferId, from: usize, to: usize, limit: usize) -> usize {
        let chars = self.chars(buffer);
        let from = from.min(chars.len());
        let to = to.min(chars.len());
        chars[from..to]
            .iter()
            .filter(|c| **c == '\n')
            .take(limit)
            .count()
    }

    fn buffer_exists(&self, buffer: BufferId) -> bool {
        self.buffers.contains_key(&buffer)
    }

    fn accessible_range(&self, buffer: BufferId) -> Range<usize> {
        match self.narrowed.get(&buffer) {
            Some(range) => range.clone(),
            None => 0..self.chars(buffer).len(),
        }
    }

    fn widen(&mut self, buffer: BufferId) {
        self.narrowed.remove(&buffer);
        self.widened.push(buffer);
    }

    fn jump_to(&mut self, position: Position) {
        self.cursor = position;
        self.jumps.push(position);
    }

    fn mode_tags(&self, buffer: BufferId) -> Vec<String> {
        self.mode_tags.get(&buffer).cloned().unwrap_or_default()
    }

    fn prompt_active(&self) -> bool {
        self.prompt_active
    }

    fn mark_head(&self) -> Option<Position> {
        self.mark_head
    }

    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// Records every annotation the engine creates, updates, or destroys.
#[derive(Default)]
pub struct MockSurface {
    pub annotations: HashMap<u64, Annotation>,
    next_id: u64,
    pub created: usize,
    pub updated: usize,
    pub destroyed: usize,
}

impl MockSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of annotations currently alive.
    pub fn live(&self) -> usize {
        self.annotations.len()
    }

    pub fn get(&self, id: AnnotationId) -> Option<&Annotation> {
        self.annotations.get(&id.0)
    }
}

impl AnnotationSurface for MockSurface {
    fn create(&mut self, annotation: Annotation) -> AnnotationId {
        self.next_id += 1;
        self.created += 1;
        self.annotations.insert(self.next_id, annotation);
        AnnotationId(self.next_id)
    }

    fn update(&mut self, id: AnnotationId, annotation: Annotation) {
        self.updated += 1;
        self.annotations.insert(id.0, annotation);
    }

    fn destroy(&mut self, id: AnnotationId) {
        self.destroyed += 1;
        self.annotations.remove(&id.0);
    }
}

/// Records armed timers without ever firing them; tests drive
/// `Glint::decay_tick` by hand.
#[derive(Default)]
pub struct MockScheduler {
    next_id: u64,
    pub active: Vec<TimerId>,
    pub schedules: Vec<(Duration, Duration)>,
    pub canceled: usize,
}

impl MockScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Delay and interval of the most recently armed timer.
    pub fn last_schedule(&self) -> Option<(Duration, Duration)> {
        self.schedules.last().copied()
    }
}

impl FadeScheduler for MockScheduler {
    fn schedule(&mut self, delay: Duration, interval: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.active.push(id);
        self.schedules.push((delay, interval));
        id
    }

    fn cancel(&mut self, timer: TimerId) {
        self.active.retain(|t| *t != timer);
        self.canceled += 1;
    }
}

/// Records which event kinds are subscribed.
#[derive(Default)]
pub struct MockBus {
    pub subscribed: HashSet<EventKind>,
    pub subscribe_calls: usize,
    pub unsubscribe_calls: usize,
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventBus for MockBus {
    fn subscribe(&mut self, kind: EventKind) {
        self.subscribe_calls += 1;
        self.subscribed.insert(kind);
    }

    fn unsubscribe(&mut self, kind: EventKind) {
        self.unsubscribe_calls += 1;
        self.subscribed.remove(&kind);
    }
}
