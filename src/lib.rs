//! 用户事件中继基础库（user-event-relay）
//!
//! 将事件流触发器投递的原始引号分隔消息解析为类型化的用户事件记录，
//! 封装为传输信封后转发至输出事件流：
//! - 格式化器（`formatter`）：按固定位置提取三个字段的纯函数核心
//! - 用户事件模型（`user_event`）：事件类型、事件记录与传输信封
//! - 发布协议（`publish`）：生产者与客户端抽象，附内存实现
//! - 中继（`relay`）：单次调用的"接收 → 格式化 → 发布"编排
//! - 配置（`config`）：从进程环境装配的外部传输标识与丢弃开关
//!
//! 本 crate 不包含真实传输、触发器生命周期与重试/重投语义，
//! 这些由外部运行时与客户端库承担，仅在协议边界上对接。
//!
//! 典型用法：
//! 1. 通过 `RelaySettings::from_env` 装配配置；
//! 2. 选择 `publish` 中的客户端协议并提供具体实现（或使用内存实现）；
//! 3. 构造 `UserEventRelay`，由外部触发器对每条消息调用 `handle`。
//!
pub mod config;
pub mod error;
pub mod formatter;
pub mod publish;
pub mod relay;
pub mod user_event;
