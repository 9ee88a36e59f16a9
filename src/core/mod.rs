pub mod driver;
pub mod event;
pub mod observer;
pub mod state;

pub use driver::SchedCore;
pub use event::SimEvent;
pub use state::{JobId, SimCtx, Task, TaskState, Ticks};
