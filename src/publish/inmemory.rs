//! 内存版事件流（InMemoryEventHub）
//!
//! 基于 `tokio::sync::broadcast` 实现的轻量事件流，满足
//! `EventHubClient`/`EventProducer` 协议：
//! - 每个流名称对应一条独立的广播通道；
//! - `subscribe`：返回 `'static` 生命周期信封流，便于在 `tokio::spawn` 中使用；
//! - 典型用途：测试环境、示例与本地开发。
//!
//! 注意：无订阅者时发送将被忽略（非致命）；已释放的生产者拒绝入队。
//!
use crate::error::{RelayError, RelayResult as Result};
use crate::publish::{EventHubClient, EventProducer};
use crate::user_event::EventEnvelope;
use async_trait::async_trait;
use futures_core::stream::BoxStream;
use futures_util::StreamExt;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::{RwLock, broadcast};
use tokio_stream::wrappers::BroadcastStream;

const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// 内存事件流集合：按流名称隔离的广播通道
#[derive(Clone)]
pub struct InMemoryEventHub {
    channels: Arc<RwLock<HashMap<String, broadcast::Sender<EventEnvelope>>>>,
    capacity: usize,
    open_producers: Arc<AtomicUsize>,
}

impl InMemoryEventHub {
    /// 创建内存事件流集合，`capacity` 为每条通道的广播缓冲区容量
    pub fn new(capacity: usize) -> Self {
        Self {
            channels: Arc::new(RwLock::new(HashMap::new())),
            capacity,
            open_producers: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// 订阅指定流上的信封
    pub async fn subscribe(&self, stream: &str) -> BoxStream<'static, Result<EventEnvelope>> {
        let rx = self.sender(stream).await.subscribe();
        let envelopes = BroadcastStream::new(rx).map(|r| {
            r.map_err(|e| RelayError::EventHub {
                reason: e.to_string(),
            })
        });
        Box::pin(envelopes)
    }

    /// 当前未释放的生产者数量（用于验证获取-使用-释放约束）
    pub fn open_producers(&self) -> usize {
        self.open_producers.load(Ordering::Relaxed)
    }

    async fn sender(&self, stream: &str) -> broadcast::Sender<EventEnvelope> {
        if let Some(tx) = self.channels.read().await.get(stream) {
            return tx.clone();
        }

        let mut channels = self.channels.write().await;
        channels
            .entry(stream.to_string())
            .or_insert_with(|| broadcast::channel(self.capacity).0)
            .clone()
    }
}

impl Default for InMemoryEventHub {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY)
    }
}

#[async_trait]
impl EventHubClient for InMemoryEventHub {
    async fn producer(&self, stream: &str) -> Result<Box<dyn EventProducer>> {
        let tx = self.sender(stream).await;
        self.open_producers.fetch_add(1, Ordering::Relaxed);

        Ok(Box::new(InMemoryProducer {
            stream: stream.to_string(),
            tx,
            closed: AtomicBool::new(false),
            open_producers: self.open_producers.clone(),
        }))
    }
}

/// 单个流上的生产者句柄
pub struct InMemoryProducer {
    stream: String,
    tx: broadcast::Sender<EventEnvelope>,
    closed: AtomicBool,
    open_producers: Arc<AtomicUsize>,
}

#[async_trait]
impl EventProducer for InMemoryProducer {
    async fn enqueue(&self, event: &EventEnvelope) -> Result<()> {
        if self.closed.load(Ordering::Acquire) {
            return Err(RelayError::EventHub {
                reason: format!("producer for stream `{}` is closed", self.stream),
            });
        }

        // 若当前无订阅者，broadcast 的 send 会返回错误，这里视为非致命并忽略
        let _ = self.tx.send(event.clone());
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        // 重复释放是无害的幂等操作，计数只在首次释放时递减
        if !self.closed.swap(true, Ordering::AcqRel) {
            self.open_producers.fetch_sub(1, Ordering::Relaxed);
        }
        Ok(())
    }
}
