//! 事件发布子系统（publish）
//!
//! 提供向下游事件流发布信封的协议与内存实现：
//! - `EventProducer`：单个流上的入队与释放；
//! - `EventHubClient`：按流名称获取生产者；
//! - `InMemoryEventHub`：基于广播通道的内存实现，用于测试与本地开发。
//!
//! 该模块仅定义协议，不绑定具体传输实现，可对接任意消息系统或内存实现。
//!
pub mod inmemory;
pub mod producer;

pub use inmemory::{InMemoryEventHub, InMemoryProducer};
pub use producer::{EventHubClient, EventProducer};
