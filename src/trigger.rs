//! Trigger policy: when a finished command deserves a blink.
//!
//! Before each command the engine captures a [`Snapshot`] of the editor
//! state. After the command, the policy compares the snapshot against
//! the live state to decide whether the motion was large, and checks
//! the suppression rules that veto blinks entirely.

use crate::host::{EditorOps, Position, WindowId};
use glint_config::Config;
use std::collections::HashSet;

/// Editor state captured just before a command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    /// Cursor position before the command.
    pub point: Position,
    /// Focused window before the command.
    pub window: WindowId,
    /// Scroll start of that window before the command.
    pub window_start: usize,
    /// Head of the host's mark list before the command.
    pub mark_head: Option<Position>,
}

impl Snapshot {
    pub fn capture(editor: &dyn EditorOps) -> Self {
        let window = editor.focused_window();
        Self {
            point: editor.cursor(),
            window,
            window_start: editor.window_start(window),
            mark_head: editor.mark_head(),
        }
    }
}

/// Everything a suppression predicate may inspect.
pub struct TriggerContext<'a> {
    /// Name of the command that just finished.
    pub command: &'a str,
    /// State captured before the command ran.
    pub snapshot: &'a Snapshot,
    /// Live editor state after the command.
    pub editor: &'a dyn EditorOps,
}

/// Custom veto installed by the embedder.
pub type SuppressionPredicate = Box<dyn Fn(&TriggerContext<'_>) -> bool>;

/// Decides whether a finished command warrants a blink.
pub struct TriggerPolicy {
    excluded_modes: HashSet<String>,
    excluded_commands: HashSet<String>,
    line_threshold: usize,
    column_threshold: Option<usize>,
    predicates: Vec<SuppressionPredicate>,
}

impl TriggerPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            excluded_modes: config.excluded_modes.iter().cloned().collect(),
            excluded_commands: config.excluded_commands.iter().cloned().collect(),
            line_threshold: config.movement_line_threshold,
            column_threshold: config.movement_column_threshold,
            predicates: Vec::new(),
        }
    }

    /// Re-read the configurable parts of the policy. Installed
    /// predicates survive the update.
    pub fn update(&mut self, config: &Config) {
        self.excluded_modes = config.excluded_modes.iter().cloned().collect();
        self.excluded_commands = config.excluded_commands.iter().cloned().collect();
        self.line_threshold = config.movement_line_threshold;
        self.column_threshold = config.movement_column_threshold;
    }

    /// Install a custom suppression predicate. A `true` return vetoes
    /// the blink.
    pub fn add_predicate(&mut self, predicate: SuppressionPredicate) {
        self.predicates.push(predicate);
    }

    /// Whether any suppression rule vetoes blinking right now.
    ///
    /// Checked in order: prompt focus, excluded buffer mode tags,
    /// excluded command names, then custom predicates.
    pub fn is_suppressed(&self, ctx: &TriggerContext<'_>) -> bool {
        if ctx.editor.prompt_active() {
            log::trace!("Suppressed: prompt surface focused");
            return true;
        }
        let buffer = ctx.editor.cursor().buffer;
        if ctx
            .editor
            .mode_tags(buffer)
            .iter()
            .any(|tag| self.excluded_modes.contains(tag))
        {
            log::trace!("Suppressed: excluded mode in {:?}", buffer);
            return true;
        }
        if self.excluded_commands.contains(ctx.command) {
            log::trace!("Suppressed: excluded command {:?}", ctx.command);
            return true;
        }
        self.predicates.iter().any(|p| p(ctx))
    }

    /// Whether the cursor motion since `snapshot` counts as large.
    ///
    /// A buffer or window switch is always large. Within one buffer the
    /// line delta must exceed the line threshold, and when a column
    /// threshold is set the column delta must exceed it as well. Line
    /// counting is capped just past the threshold so huge jumps stay
    /// cheap.
    pub fn is_large_movement(&self, snapshot: &Snapshot, editor: &dyn EditorOps) -> bool {
        let point = editor.cursor();
        if point.buffer != snapshot.point.buffer || editor.focused_window() != snapshot.window {
            return true;
        }
        let lines = editor.count_lines_between(
            point.buffer,
            snapshot.point.offset.min(point.offset),
            snapshot.point.offset.max(point.offset),
            self.line_threshold + 1,
        );
        if lines <= self.line_threshold {
            return false;
        }
        match self.column_threshold {
            Some(columns) => {
                let before = editor.column_of(snapshot.point);
                let after = editor.column_of(point);
                before.abs_diff(after) > columns
            }
            None => true,
        }
    }

    pub fn line_threshold(&self) -> usize {
        self.line_threshold
    }

    pub fn predicate_count(&self) -> usize {
        self.predicates.len()
    }
}

impl std::fmt::Debug for TriggerPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriggerPolicy")
            .field("excluded_modes", &self.excluded_modes)
            .field("excluded_commands", &self.excluded_commands)
            .field("line_threshold", &self.line_threshold)
            .field("column_threshold", &self.column_threshold)
            .field("predicates", &self.predicates.len())
            .finish()
    }
}
