//! 用户事件（User Event）模型
//!
//! 定义事件类型的封闭集合（`UserEventType`）、格式化后的事件记录
//! （`UserEvent`）以及发布时使用的传输信封（`EventEnvelope`）。

mod envelope;
mod event_type;
mod record;

pub use envelope::{CONTENT_TYPE_JSON, EventEnvelope};
pub use event_type::UserEventType;
pub use record::UserEvent;
