//! Toast notifications: transient status cards stacked in the top-right corner.

mod center;
mod kind;
mod lifecycle;
mod outcomes;

pub use center::{CONTAINER_ID, NotificationCenter, ToastHandle, ToastId};
pub use kind::{ToastKind, ToastStyle};
pub use lifecycle::{Lifecycle, Phase, Step, ToastTimings};
pub use outcomes::*;
