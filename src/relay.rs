//! 用户事件中继（UserEventRelay）
//!
//! 编排"接收 → 格式化 → 封装 → 发布"的单次调用流程：
//! - 每次调用从客户端获取一个生产者，并保证在任一退出路径上释放；
//! - 丢弃开关开启时直接返回，不获取任何资源；
//! - 失败时记录原始消息与错误，随后继续向上抛出，
//!   由外部运行时决定重试与死信策略。
//!
//! 每次调用相互独立且无共享可变状态，可被外部触发器并发调用。
//!
use crate::config::RelaySettings;
use crate::error::RelayResult as Result;
use crate::formatter::UserEventFormatter;
use crate::publish::{EventHubClient, EventProducer};
use crate::user_event::EventEnvelope;
use std::sync::Arc;
use tracing::{debug, error, info};

/// 用户事件中继：单条消息的处理入口
pub struct UserEventRelay {
    client: Arc<dyn EventHubClient>,
    formatter: UserEventFormatter,
    settings: RelaySettings,
}

impl UserEventRelay {
    pub fn new(
        client: Arc<dyn EventHubClient>,
        formatter: UserEventFormatter,
        settings: RelaySettings,
    ) -> Self {
        Self {
            client,
            formatter,
            settings,
        }
    }

    /// 处理一条原始用户事件消息
    ///
    /// 除格式化器内部的未识别事件类型降级外不吞并任何错误；
    /// 格式化失败与发布失败都会在释放生产者后原样返回给调用方。
    pub async fn handle(&self, message: &str) -> Result<()> {
        if self.settings.discard_events {
            debug!("discard flag is set, skipping user event message");
            return Ok(());
        }

        let producer = self.client.producer(&self.settings.event_hub_name).await?;
        let routed = self.route(producer.as_ref(), message).await;

        if let Err(err) = &routed {
            error!(%message, %err, "failed to format or enqueue user event message");
        }

        // 获取-使用-释放：无论成功与否都释放生产者
        let released = producer.close().await;
        routed?;
        released
    }

    async fn route(&self, producer: &dyn EventProducer, message: &str) -> Result<()> {
        debug!(%message, "received raw user event message");

        let event = self.formatter.format(message)?;
        let envelope = EventEnvelope::json(&event)?;

        debug!(
            event_id = envelope.event_id(),
            "routing formatted user event message"
        );
        producer.enqueue(&envelope).await?;

        info!(
            event_id = envelope.event_id(),
            "formatted user event message forwarded"
        );
        Ok(())
    }
}
