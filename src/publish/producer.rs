//! 事件生产者（EventProducer）协议
//!
//! 定义向下游事件流发布信封的统一抽象：仅负责入队与释放，
//! 重试、连接与凭据管理由具体传输实现承担。
//!
use crate::{error::RelayResult as Result, user_event::EventEnvelope};
use async_trait::async_trait;

/// 事件生产者：向单个事件流发布信封
#[async_trait]
pub trait EventProducer: Send + Sync {
    /// 将信封入队到下游事件流
    async fn enqueue(&self, event: &EventEnvelope) -> Result<()>;

    /// 批量入队，默认逐条发布
    async fn enqueue_batch(&self, events: &[EventEnvelope]) -> Result<()> {
        for event in events {
            self.enqueue(event).await?;
        }
        Ok(())
    }

    /// 释放生产者持有的连接资源；释放后不可再入队
    async fn close(&self) -> Result<()>;
}

/// 事件流客户端：按流名称获取生产者
///
/// 每次调用返回一个独立句柄，调用方负责在任一退出路径上释放。
#[async_trait]
pub trait EventHubClient: Send + Sync {
    async fn producer(&self, stream: &str) -> Result<Box<dyn EventProducer>>;
}
