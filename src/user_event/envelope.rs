use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// JSON 载荷的内容类型标记
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// 传输信封：载荷主体与内容类型标记，外加发布侧元数据
///
/// 信封交给外部发布操作后即脱离本 crate 的控制，
/// 投递与重试语义由外部传输承担。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// 信封唯一标识，由发布侧生成
    event_id: String,
    /// 载荷的内容类型
    content_type: String,
    /// 信封创建时间
    occurred_at: DateTime<Utc>,
    /// 载荷主体
    body: Value,
}

impl EventEnvelope {
    /// 以 JSON 内容类型包装任意可序列化载荷
    pub fn json<T: Serialize>(body: &T) -> Result<Self, serde_json::Error> {
        Ok(Self {
            event_id: Uuid::new_v4().to_string(),
            content_type: CONTENT_TYPE_JSON.to_string(),
            occurred_at: Utc::now(),
            body: serde_json::to_value(body)?,
        })
    }

    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn body(&self) -> &Value {
        &self.body
    }
}
