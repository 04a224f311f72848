//! Entrance animations
//!
//! Elements start in an offset, transparent pose and transition to rest either
//! on the first animation frame after mount or when their section scrolls into
//! view. The pose math lives in plain functions; the hooks only wire them to
//! browser events.

use crate::config::use_config;
use leptos::*;

/// Starting pose of an element before it reveals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale: f64,
    pub rotate_x: f64,
    pub duration_ms: u64,
}

impl Entrance {
    /// Product cards in a category grid
    pub const CARD: Entrance = Entrance {
        offset_x: 0.0,
        offset_y: 60.0,
        scale: 0.9,
        rotate_x: 0.0,
        duration_ms: 800,
    };

    /// Category teaser tiles on the landing page
    pub const TEASER: Entrance = Entrance {
        offset_x: 0.0,
        offset_y: 40.0,
        scale: 1.0,
        rotate_x: 20.0,
        duration_ms: 800,
    };

    pub const FEATURE: Entrance = Entrance {
        offset_x: 0.0,
        offset_y: 50.0,
        scale: 1.0,
        rotate_x: 0.0,
        duration_ms: 800,
    };

    pub const STAT: Entrance = Entrance {
        offset_x: 0.0,
        offset_y: 30.0,
        scale: 0.85,
        rotate_x: 0.0,
        duration_ms: 1000,
    };

    /// Contact form slides in from the right
    pub const SLIDE_IN: Entrance = Entrance {
        offset_x: 100.0,
        offset_y: 0.0,
        scale: 1.0,
        rotate_x: 0.0,
        duration_ms: 1200,
    };

    /// Inline style for the element at `index` in a staggered group
    pub fn style(&self, visible: bool, index: usize, stagger_ms: u64) -> String {
        let delay = stagger_delay_ms(index, stagger_ms);
        let transition = format!(
            "transition: opacity {d}ms ease-out {delay}ms, transform {d}ms cubic-bezier(0.22, 1, 0.36, 1) {delay}ms;",
            d = self.duration_ms,
        );
        if visible {
            format!("opacity: 1; transform: none; {transition}")
        } else {
            format!(
                "opacity: 0; transform: perspective(800px) translate({}px, {}px) scale({}) rotateX({}deg); {transition}",
                self.offset_x, self.offset_y, self.scale, self.rotate_x
            )
        }
    }
}

pub fn stagger_delay_ms(index: usize, stagger_ms: u64) -> u64 {
    (index as u64).saturating_mul(stagger_ms)
}

/// Whether a scroll-revealed element plays back when it leaves view again
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMode {
    Once,
    Reversible,
}

/// Two-state reveal tracker driven by a section's position in the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollReveal {
    mode: RevealMode,
    viewport_fraction: f64,
    revealed: bool,
}

impl ScrollReveal {
    pub fn new(mode: RevealMode, viewport_fraction: f64) -> Self {
        Self {
            mode,
            viewport_fraction,
            revealed: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed the section's top edge (relative to the viewport) and the viewport
    /// height. Returns true when the state flipped.
    pub fn observe(&mut self, top: f64, viewport_height: f64) -> bool {
        let entered = top <= viewport_height * self.viewport_fraction;
        let next = match (self.mode, self.revealed) {
            (RevealMode::Once, true) => true,
            _ => entered,
        };
        let changed = next != self.revealed;
        self.revealed = next;
        changed
    }
}

/// Becomes true on the first animation frame after mount
pub fn use_mount_reveal() -> ReadSignal<bool> {
    let (visible, set_visible) = create_signal(false);
    request_animation_frame(move || set_visible.set(true));
    visible
}

/// Tracks whether the element with `anchor_id` has scrolled into view
pub fn use_scroll_reveal(anchor_id: &'static str, mode: RevealMode) -> ReadSignal<bool> {
    let config = use_config();
    let (revealed, set_revealed) = create_signal(false);
    let tracker = store_value(ScrollReveal::new(mode, config.reveal_viewport_fraction));

    let check = move || {
        let (Some(top), Some(viewport_height)) = (element_top(anchor_id), viewport_height()) else {
            return;
        };
        let mut changed = false;
        tracker.update_value(|t| changed = t.observe(top, viewport_height));
        if changed {
            set_revealed.set(tracker.with_value(ScrollReveal::is_revealed));
        }
    };

    // Sections already on screen at mount reveal without waiting for a scroll
    request_animation_frame(check);
    let listener = window_event_listener(ev::scroll, move |_| check());
    on_cleanup(move || listener.remove());

    revealed
}

fn element_top(id: &str) -> Option<f64> {
    document()
        .get_element_by_id(id)
        .map(|el| el.get_bounding_client_rect().top())
}

fn viewport_height() -> Option<f64> {
    window().inner_height().ok().and_then(|h| h.as_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_in_list_order() {
        let delays: Vec<u64> = (0..4).map(|i| stagger_delay_ms(i, 100)).collect();
        assert_eq!(delays, vec![0, 100, 200, 300]);
        assert_eq!(stagger_delay_ms(usize::MAX, u64::MAX), u64::MAX);
    }

    #[test]
    fn test_entrance_style() {
        let hidden = Entrance::CARD.style(false, 2, 100);
        assert!(hidden.starts_with("opacity: 0;"));
        assert!(hidden.contains("translate(0px, 60px) scale(0.9)"));
        assert!(hidden.contains("800ms ease-out 200ms"));

        let shown = Entrance::CARD.style(true, 2, 100);
        assert!(shown.starts_with("opacity: 1; transform: none;"));
        assert!(shown.contains("200ms"));
    }

    #[test]
    fn test_reversible_reveal_replays() {
        let mut reveal = ScrollReveal::new(RevealMode::Reversible, 0.8);
        assert!(!reveal.observe(900.0, 1000.0));
        assert!(reveal.observe(700.0, 1000.0));
        assert!(reveal.is_revealed());
        assert!(!reveal.observe(-200.0, 1000.0));
        assert!(reveal.observe(950.0, 1000.0));
        assert!(!reveal.is_revealed());
        assert!(reveal.observe(800.0, 1000.0));
        assert!(reveal.is_revealed());
    }

    #[test]
    fn test_once_reveal_sticks() {
        let mut reveal = ScrollReveal::new(RevealMode::Once, 0.8);
        assert!(reveal.observe(100.0, 1000.0));
        assert!(!reveal.observe(2000.0, 1000.0));
        assert!(reveal.is_revealed());
    }
}
