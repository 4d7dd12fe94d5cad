use std::sync::{Arc, Mutex};

/// Capability the lock needs from the host's scrolling surface.
///
/// The lock calls `apply_block` exactly when the count crosses 0→1 and
/// `remove_block` exactly when it crosses back to 0, so implementations can
/// assume the calls arrive strictly alternating, starting with `apply_block`.
pub trait Viewport {
    /// Put the surface into its scroll-blocking state
    fn apply_block(&self);

    /// Return the surface to the state it had before `apply_block`
    fn remove_block(&self);
}

impl<V: Viewport + ?Sized> Viewport for Arc<V> {
    fn apply_block(&self) {
        (**self).apply_block()
    }

    fn remove_block(&self) {
        (**self).remove_block()
    }
}

/// The overflow value that blocks scrolling on a [`StyleViewport`]
pub const BLOCKING_OVERFLOW: &str = "hidden";

/// In-memory viewport modeling a single mutable overflow style attribute.
///
/// `apply_block` captures the attribute's prior value and sets it to
/// [`BLOCKING_OVERFLOW`]; `remove_block` restores the captured value, so a
/// full lock/unlock cycle is an identity on the host's styling. A host with a
/// real display surface supplies its own [`Viewport`] instead.
#[derive(Debug, Default)]
pub struct StyleViewport {
    style: Mutex<OverflowStyle>,
}

#[derive(Debug, Default)]
struct OverflowStyle {
    current: Option<String>,
    prior: Option<String>,
    blocked: bool,
}

impl StyleViewport {
    /// Create a viewport with no overflow attribute set
    pub fn new() -> StyleViewport {
        StyleViewport::default()
    }

    /// Create a viewport whose overflow attribute starts at the given value
    pub fn with_overflow(value: &str) -> StyleViewport {
        StyleViewport {
            style: Mutex::new(OverflowStyle {
                current: Some(value.to_string()),
                prior: None,
                blocked: false,
            }),
        }
    }

    /// Get the current value of the overflow attribute, if any is set
    pub fn overflow(&self) -> Option<String> {
        self.style
            .lock()
            .expect("Failed to get style lock")
            .current
            .clone()
    }
}

impl Viewport for StyleViewport {
    fn apply_block(&self) {
        let mut style = self.style.lock().expect("Failed to get style lock");

        if !style.blocked {
            style.prior = style.current.take();
            style.current = Some(BLOCKING_OVERFLOW.to_string());
            style.blocked = true;
        }
    }

    fn remove_block(&self) {
        let mut style = self.style.lock().expect("Failed to get style lock");

        if style.blocked {
            style.current = style.prior.take();
            style.blocked = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_sets_and_clears_unset_attribute() {
        let viewport = StyleViewport::new();
        assert_eq!(viewport.overflow(), None);

        viewport.apply_block();
        assert_eq!(viewport.overflow(), Some(BLOCKING_OVERFLOW.to_string()));

        viewport.remove_block();
        assert_eq!(viewport.overflow(), None);
    }

    #[test]
    fn test_block_restores_prior_value() {
        let viewport = StyleViewport::with_overflow("scroll");

        viewport.apply_block();
        assert_eq!(viewport.overflow(), Some(BLOCKING_OVERFLOW.to_string()));

        viewport.remove_block();
        assert_eq!(viewport.overflow(), Some("scroll".to_string()));
    }

    #[test]
    fn test_unbalanced_calls_are_harmless() {
        let viewport = StyleViewport::with_overflow("auto");

        viewport.remove_block();
        assert_eq!(viewport.overflow(), Some("auto".to_string()));

        viewport.apply_block();
        viewport.apply_block();
        viewport.remove_block();
        assert_eq!(viewport.overflow(), Some("auto".to_string()));
    }
}
