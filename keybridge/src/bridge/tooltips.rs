use crate::errors::BridgeResult;
use std::fmt::Debug;
use std::sync::Arc;

/// A trait for closures that handle tooltip enhancement requests.
///
/// # Purpose
/// `TooltipCallback` defines the interface for any callable invoked when the
/// bridge receives a `ShowTooltips` request. The embedding layer registers a
/// callback that schedules an enhancement pass over currently-rendered
/// tooltip-marked elements on its next rendering opportunity; the bridge only
/// forwards the trigger and performs no rendering work itself.
///
/// # Implementations
/// Automatically implemented for any function or closure that:
/// - Takes no parameters
/// - Returns `BridgeResult<()>`
/// - Is `Send + Sync` (safe to share across threads)
pub trait TooltipCallback: Send + Sync + Fn() -> BridgeResult<()> {}

impl<F> TooltipCallback for F where F: Send + Sync + Fn() -> BridgeResult<()> {}

/// A listener for tooltip triggers that wraps a callback function.
///
/// # Characteristics
/// - **Callback-Based**: Wraps any `TooltipCallback` implementation
/// - **Thread-Safe**: Uses `Arc<dyn TooltipCallback>` for safe concurrent access
/// - **Cloneable**: Cloning is cheap (only increments Arc reference count)
///
/// # Examples
///
/// ```ignore
/// let listener = TooltipListener::new(|| {
///     renderer.schedule_tooltip_pass();
///     Ok(())
/// });
/// let bridge = StorageBridge::builder().on_show_tooltips(listener).build();
/// ```
#[derive(Clone)]
pub struct TooltipListener {
    on_show: Arc<dyn TooltipCallback>,
}

impl TooltipListener {
    /// Creates a new tooltip listener with the given callback.
    ///
    /// # Arguments
    ///
    /// * `on_show` - A closure or function invoked for each `ShowTooltips`
    ///   request received by the bridge
    pub fn new(on_show: impl TooltipCallback + 'static) -> Self {
        TooltipListener {
            on_show: Arc::new(on_show),
        }
    }

    pub(crate) fn notify(&self) -> BridgeResult<()> {
        (self.on_show)()
    }
}

impl Debug for TooltipListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TooltipListener").finish()
    }
}
