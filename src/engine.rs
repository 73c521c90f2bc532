//! The engine that ties highlight, ring, and policy together.
//!
//! [`Glint`] owns the configuration, the highlight engine, the
//! navigation ring, and the trigger policy. The host feeds it events
//! through [`Glint::handle_event`] and timer ticks through
//! [`Glint::decay_tick`]; the engine drives the host back through the
//! collaborator traits bundled in [`HostContext`].

use crate::error::NavError;
use crate::events::{EventBus, EventKind, HostEvent};
use crate::highlight::HighlightEngine;
use crate::host::{
    AnnotationSurface, EditorOps, FadeScheduler, HostContext, Position, WindowId,
};
use crate::mark_ring::{MarkRing, TraversalDirection};
use crate::trigger::{Snapshot, SuppressionPredicate, TriggerContext, TriggerPolicy};
use glint_config::{Config, ConfigError};
use std::collections::HashSet;

/// What the most recent engine-visible command was, used to tell a
/// continued ring traversal from a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LastCommand {
    Other,
    Traversal,
}

/// The cursor-flash and navigation-ring engine.
pub struct Glint {
    config: Config,
    highlight: HighlightEngine,
    ring: MarkRing,
    policy: TriggerPolicy,
    snapshot: Option<Snapshot>,
    scrolled: HashSet<WindowId>,
    last_command: LastCommand,
    command_was_traversal: bool,
    anchor: Option<Position>,
    enabled: bool,
}

impl Glint {
    /// Build an engine from a validated configuration.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let ring = MarkRing::new(config.ring_capacity);
        let policy = TriggerPolicy::from_config(&config);
        Ok(Self {
            config,
            highlight: HighlightEngine::new(),
            ring,
            policy,
            snapshot: None,
            scrolled: HashSet::new(),
            last_command: LastCommand::Other,
            command_was_traversal: false,
            anchor: None,
            enabled: false,
        })
    }

    /// Subscribe to the host event streams and start reacting.
    /// Idempotent.
    pub fn enable(&mut self, bus: &mut dyn EventBus) {
        if self.enabled {
            return;
        }
        for kind in EventKind::ALL {
            bus.subscribe(kind);
        }
        self.enabled = true;
        log::info!("Engine enabled");
    }

    /// Unsubscribe, clear any painted highlight, and disarm the decay
    /// timer. Idempotent.
    pub fn disable(
        &mut self,
        bus: &mut dyn EventBus,
        surface: &mut dyn AnnotationSurface,
        scheduler: &mut dyn FadeScheduler,
    ) {
        if !self.enabled {
            return;
        }
        for kind in EventKind::ALL {
            bus.unsubscribe(kind);
        }
        self.highlight.cancel_timer(scheduler);
        self.highlight.vanish(surface);
        self.snapshot = None;
        self.scrolled.clear();
        self.enabled = false;
        log::info!("Engine disabled");
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// React to one host event. Ignored while disabled.
    pub fn handle_event(&mut self, event: &HostEvent, ctx: &mut HostContext<'_>) {
        if !self.enabled {
            return;
        }
        match event {
            HostEvent::PreCommand { .. } => self.on_pre_command(ctx.editor),
            HostEvent::PostCommand { command } => self.on_post_command(command, ctx),
            HostEvent::Scroll { window } => {
                self.scrolled.insert(*window);
            }
            HostEvent::FocusChange => self.on_focus_change(ctx),
        }
    }

    fn on_pre_command(&mut self, editor: &dyn EditorOps) {
        self.snapshot = Some(Snapshot::capture(editor));
    }

    fn on_post_command(&mut self, command: &str, ctx: &mut HostContext<'_>) {
        if std::mem::take(&mut self.command_was_traversal) {
            // Ring-driven motion already blinked and must not re-record.
            self.snapshot = None;
            self.scrolled.clear();
            return;
        }
        let Some(snapshot) = self.snapshot.take() else {
            return;
        };

        let focused = ctx.editor.focused_window();
        let scrolled = self.scrolled.remove(&focused)
            || (focused == snapshot.window
                && ctx.editor.window_start(focused) != snapshot.window_start);
        self.scrolled.clear();

        let large = scrolled || self.policy.is_large_movement(&snapshot, &*ctx.editor);
        let suppressed = self.policy.is_suppressed(&TriggerContext {
            command,
            snapshot: &snapshot,
            editor: &*ctx.editor,
        });

        if large && !suppressed {
            log::debug!("Large movement after {:?}, blinking", command);
            self.blink(ctx);
            self.record(snapshot.point, true, ctx.editor);
        } else if ctx.editor.mark_head() != snapshot.mark_head {
            // The host pushed a mark of its own; mirror the departure.
            self.record(snapshot.point, true, ctx.editor);
        }
        self.last_command = LastCommand::Other;
    }

    fn on_focus_change(&mut self, ctx: &mut HostContext<'_>) {
        let snapshot = Snapshot::capture(&*ctx.editor);
        let suppressed = self.policy.is_suppressed(&TriggerContext {
            command: "",
            snapshot: &snapshot,
            editor: &*ctx.editor,
        });
        if !suppressed {
            log::debug!("Focus change, blinking");
            self.blink(ctx);
        }
        self.last_command = LastCommand::Other;
    }

    /// Blink at the current cursor position.
    pub fn blink(&mut self, ctx: &mut HostContext<'_>) {
        let position = ctx.editor.cursor();
        self.highlight
            .blink_at(position, &self.config, ctx.editor, ctx.surface, ctx.scheduler);
    }

    /// Consume one fade segment. The host calls this on every timer
    /// fire; the timer is disarmed once nothing remains painted.
    pub fn decay_tick(
        &mut self,
        surface: &mut dyn AnnotationSurface,
        scheduler: &mut dyn FadeScheduler,
    ) {
        if !self.highlight.decay(surface) {
            self.highlight.cancel_timer(scheduler);
        }
    }

    /// Explicitly record the current cursor position, with a
    /// confirmation message.
    pub fn record_here(&mut self, editor: &mut dyn EditorOps) {
        let position = editor.cursor();
        self.record(position, false, editor);
    }

    fn record(&mut self, position: Position, silent: bool, editor: &mut dyn EditorOps) {
        if self.ring.push(position) && !silent {
            editor.notify("Position recorded");
        }
    }

    /// Jump to the previous (older) recorded position.
    pub fn previous(&mut self, ctx: &mut HostContext<'_>) -> Result<(), NavError> {
        self.traverse(TraversalDirection::Backward, ctx)
    }

    /// Jump to the next (newer) recorded position.
    pub fn next(&mut self, ctx: &mut HostContext<'_>) -> Result<(), NavError> {
        self.traverse(TraversalDirection::Forward, ctx)
    }

    fn traverse(
        &mut self,
        direction: TraversalDirection,
        ctx: &mut HostContext<'_>,
    ) -> Result<(), NavError> {
        self.command_was_traversal = true;
        if self.ring.is_empty() {
            ctx.editor.notify("No recorded positions");
            return Ok(());
        }
        if self.last_command != LastCommand::Traversal {
            self.ring.reset_cursor(direction);
            self.anchor = Some(ctx.editor.cursor());
        }
        let step = match direction {
            TraversalDirection::Backward => 1,
            TraversalDirection::Forward => -1,
        };
        let Some(target) = self.ring.advance(step) else {
            ctx.editor.notify("No recorded positions");
            return Ok(());
        };
        log::debug!("Traversing to {:?}", target);
        self.goto(target, ctx)?;
        self.blink(ctx);
        self.last_command = LastCommand::Traversal;
        Ok(())
    }

    /// Abort an in-progress traversal: return to where it started and
    /// blink there once.
    pub fn cancel(&mut self, ctx: &mut HostContext<'_>) -> Result<(), NavError> {
        if self.last_command != LastCommand::Traversal {
            return Ok(());
        }
        self.command_was_traversal = true;
        self.last_command = LastCommand::Other;
        let Some(anchor) = self.anchor.take() else {
            return Ok(());
        };
        log::debug!("Canceling traversal, returning to {:?}", anchor);
        self.goto(anchor, ctx)?;
        self.blink(ctx);
        Ok(())
    }

    fn goto(&self, position: Position, ctx: &mut HostContext<'_>) -> Result<(), NavError> {
        if !ctx.editor.buffer_exists(position.buffer) {
            ctx.editor.notify("Recorded buffer no longer exists");
            return Err(NavError::TargetGone {
                buffer: position.buffer,
            });
        }
        let range = ctx.editor.accessible_range(position.buffer);
        if position.offset < range.start || position.offset > range.end {
            if self.config.widen_on_jump {
                log::debug!("Widening {:?} for out-of-range jump", position.buffer);
                ctx.editor.widen(position.buffer);
            } else {
                ctx.editor.notify("Recorded position is outside the accessible region");
                return Err(NavError::OutOfRange {
                    offset: position.offset,
                    start: range.start,
                    end: range.end,
                });
            }
        }
        let _guard = self.ring.suppress_recording();
        ctx.editor.jump_to(position);
        Ok(())
    }

    /// Replace the configuration after validating it. The policy and
    /// ring capacity follow; installed hooks and predicates survive.
    pub fn set_config(&mut self, config: Config) -> Result<(), ConfigError> {
        config.validate()?;
        self.policy.update(&config);
        self.ring.set_capacity(config.ring_capacity);
        self.config = config;
        Ok(())
    }

    /// Register a hook invoked with the blink position before each
    /// blink paints.
    pub fn add_pre_blink_hook(&mut self, hook: Box<dyn FnMut(Position)>) {
        self.highlight.add_pre_blink_hook(hook);
    }

    /// Install a custom suppression predicate.
    pub fn add_suppression_predicate(&mut self, predicate: SuppressionPredicate) {
        self.policy.add_predicate(predicate);
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ring(&self) -> &MarkRing {
        &self.ring
    }

    pub fn highlight(&self) -> &HighlightEngine {
        &self.highlight
    }
}

impl std::fmt::Debug for Glint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Glint")
            .field("enabled", &self.enabled)
            .field("ring_len", &self.ring.len())
            .field("segments", &self.highlight.segment_count())
            .field("last_command", &self.last_command)
            .finish()
    }
}
