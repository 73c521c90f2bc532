//! The highlight engine: shine, decay, and vanish.
//!
//! A blink paints a horizontal run of colored cells at a position, the
//! ramp colors laid left to right from the seed toward the ambient
//! background. When the run would cross the end of the visual line, the
//! leftover colors render as a zero-width tail stripe after the line
//! end, clipped to the window. A repeating host timer then consumes one
//! segment per tick until nothing remains.

use crate::host::{
    Annotation, AnnotationId, AnnotationShape, AnnotationSurface, EditorOps, FadeScheduler,
    OVERLAY_PRIORITY, Position, TimerId, WindowId,
};
use crate::ramp;
use glint_config::{Color, Config};
use std::collections::VecDeque;

/// One painted single-cell segment of the active fade.
#[derive(Debug)]
struct CellSegment {
    id: AnnotationId,
    position: Position,
}

/// The end-of-line tail stripe, one color per remaining cell.
#[derive(Debug)]
struct TailSegment {
    id: AnnotationId,
    position: Position,
    colors: VecDeque<Color>,
}

/// The currently painted highlight, if any.
#[derive(Debug)]
struct Fade {
    window: WindowId,
    cells: VecDeque<CellSegment>,
    tail: Option<TailSegment>,
}

/// Paints, fades, and clears the cursor highlight.
///
/// At most one fade exists at a time. Painting a new one always clears
/// the previous one first, so overlapping blinks never leak segments.
pub struct HighlightEngine {
    fade: Option<Fade>,
    timer: Option<TimerId>,
    pre_blink_hooks: Vec<Box<dyn FnMut(Position)>>,
}

impl Default for HighlightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlightEngine {
    pub fn new() -> Self {
        Self {
            fade: None,
            timer: None,
            pre_blink_hooks: Vec::new(),
        }
    }

    /// Number of live annotation segments, the tail counted as one.
    pub fn segment_count(&self) -> usize {
        match &self.fade {
            Some(fade) => fade.cells.len() + usize::from(fade.tail.is_some()),
            None => 0,
        }
    }

    /// Whether a fade is currently painted.
    pub fn is_lit(&self) -> bool {
        self.fade.is_some()
    }

    /// Register a hook invoked with the blink position just before each
    /// blink paints.
    pub fn add_pre_blink_hook(&mut self, hook: Box<dyn FnMut(Position)>) {
        self.pre_blink_hooks.push(hook);
    }

    /// Destroy every painted segment. Safe to call when nothing is lit.
    pub fn vanish(&mut self, surface: &mut dyn AnnotationSurface) {
        let Some(fade) = self.fade.take() else {
            return;
        };
        log::trace!(
            "Vanishing {} cell(s), tail: {}",
            fade.cells.len(),
            fade.tail.is_some()
        );
        for cell in fade.cells {
            surface.destroy(cell.id);
        }
        if let Some(tail) = fade.tail {
            surface.destroy(tail.id);
        }
    }

    /// Paint a fresh highlight at `position` in `window`.
    ///
    /// Ramp colors fill cells up to the end of the visual line; leftover
    /// colors become the tail stripe, clipped so it never wraps into the
    /// next visual line. Nothing is painted when no room exists, and in
    /// that case no fade is registered.
    pub fn shine(
        &mut self,
        position: Position,
        window: WindowId,
        config: &Config,
        editor: &mut dyn EditorOps,
        surface: &mut dyn AnnotationSurface,
    ) {
        self.vanish(surface);

        let background = editor
            .background_at(position)
            .unwrap_or_else(|| editor.default_background());
        let seed = ramp::resolve_seed(&config.highlight_color, background);
        let colors = ramp::color_ramp(seed, background, config.highlight_width);

        let room_on_line = editor.cells_to_line_end(position);
        let cell_count = colors.len().min(room_on_line);

        let mut cells = VecDeque::with_capacity(cell_count);
        for (i, color) in colors.iter().take(cell_count).enumerate() {
            let cell_position = Position::new(position.buffer, position.offset + i);
            let id = surface.create(Annotation {
                window,
                position: cell_position,
                priority: OVERLAY_PRIORITY,
                shape: AnnotationShape::Cell { background: *color },
            });
            cells.push_back(CellSegment {
                id,
                position: cell_position,
            });
        }

        let leftover = colors.len() - cell_count;
        let tail_budget = editor
            .remaining_width_after_line(window, position)
            .saturating_sub(1);
        let tail_colors: VecDeque<Color> = colors
            .iter()
            .skip(cell_count)
            .take(leftover.min(tail_budget))
            .copied()
            .collect();

        let tail = if tail_colors.is_empty() {
            None
        } else {
            let tail_position = Position::new(position.buffer, position.offset + cell_count);
            let id = surface.create(Annotation {
                window,
                position: tail_position,
                priority: OVERLAY_PRIORITY,
                shape: AnnotationShape::Tail {
                    backgrounds: tail_colors.iter().copied().collect(),
                },
            });
            Some(TailSegment {
                id,
                position: tail_position,
                colors: tail_colors,
            })
        };

        if cells.is_empty() && tail.is_none() {
            log::debug!("No room to paint at {:?}", position);
            return;
        }
        log::debug!(
            "Painted {} cell(s) and {} tail color(s) at {:?}",
            cells.len(),
            tail.as_ref().map_or(0, |t| t.colors.len()),
            position
        );
        self.fade = Some(Fade {
            window,
            cells,
            tail,
        });
    }

    /// Consume one segment of the fade: the head cell when any remain,
    /// otherwise the head tail color.
    ///
    /// Returns `true` while segments remain painted afterward.
    pub fn decay(&mut self, surface: &mut dyn AnnotationSurface) -> bool {
        let Some(mut fade) = self.fade.take() else {
            return false;
        };

        if let Some(cell) = fade.cells.pop_front() {
            surface.destroy(cell.id);
        } else if let Some(mut tail) = fade.tail.take() {
            tail.colors.pop_front();
            if tail.colors.is_empty() {
                surface.destroy(tail.id);
            } else {
                surface.update(
                    tail.id,
                    Annotation {
                        window: fade.window,
                        position: tail.position,
                        priority: OVERLAY_PRIORITY,
                        shape: AnnotationShape::Tail {
                            backgrounds: tail.colors.iter().copied().collect(),
                        },
                    },
                );
                fade.tail = Some(tail);
            }
        }

        if fade.cells.is_empty() && fade.tail.is_none() {
            log::trace!("Fade fully consumed");
            return false;
        }
        self.fade = Some(fade);
        true
    }

    /// Run a full blink at `position`: clear the previous fade, run the
    /// pre-blink hooks, paint, and arm the decay timer.
    pub fn blink_at(
        &mut self,
        position: Position,
        config: &Config,
        editor: &mut dyn EditorOps,
        surface: &mut dyn AnnotationSurface,
        scheduler: &mut dyn FadeScheduler,
    ) {
        for hook in &mut self.pre_blink_hooks {
            hook(position);
        }
        self.cancel_timer(scheduler);
        let window = editor.focused_window();
        self.shine(position, window, config, editor, surface);
        if self.fade.is_some() {
            self.timer = Some(scheduler.schedule(config.fade_delay(), config.fade_interval()));
        }
    }

    /// Cancel the decay timer when one is armed.
    pub fn cancel_timer(&mut self, scheduler: &mut dyn FadeScheduler) {
        if let Some(timer) = self.timer.take() {
            scheduler.cancel(timer);
        }
    }

    /// Whether a decay timer is currently armed.
    pub fn timer_armed(&self) -> bool {
        self.timer.is_some()
    }
}

impl std::fmt::Debug for HighlightEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HighlightEngine")
            .field("fade", &self.fade)
            .field("timer", &self.timer)
            .field("pre_blink_hooks", &self.pre_blink_hooks.len())
            .finish()
    }
}
