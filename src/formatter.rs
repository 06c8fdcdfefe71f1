//! 用户事件格式化器（核心解析逻辑）
//!
//! 将引号分隔的伪 JSON 原始消息按固定位置提取三个字段：
//! - 第 4 段：事件类型令牌；
//! - 第 8 段：方括号包裹、逗号分隔的客户 ID 列表；
//! - 第 11 段：销售组织令牌。
//!
//! 这是严格的位置格式假设，不做模式校验：段数不足返回
//! `RelayError::MalformedMessage`，未识别的事件类型静默降级为 None。
//! 对输入无副作用，同一输入的两次格式化结果相等。
//!
use crate::error::{RelayError, RelayResult};
use crate::user_event::{UserEvent, UserEventType};

/// 事件类型令牌所在的段下标
const EVENT_TYPE_SEGMENT: usize = 3;
/// 客户 ID 列表所在的段下标
const CUSTOMER_ID_SEGMENT: usize = 7;
/// 销售组织所在的段下标
const SALES_ORG_SEGMENT: usize = 10;

/// 提取客户 ID 时从列表段右侧剥离的字符数
///
/// `One` 仅剥离右括号；`Two` 会额外吞掉列表末尾的一个字符，
/// 仅作为回归对照保留。样例数据下只有 `One` 能保留完整的
/// 客户 ID，故作为默认值。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrailingStrip {
    #[default]
    One,
    Two,
}

impl TrailingStrip {
    const fn width(self) -> usize {
        match self {
            TrailingStrip::One => 1,
            TrailingStrip::Two => 2,
        }
    }
}

/// 用户事件格式化器
#[derive(Debug, Clone, Copy, Default)]
pub struct UserEventFormatter {
    trailing_strip: TrailingStrip,
}

impl UserEventFormatter {
    pub fn new(trailing_strip: TrailingStrip) -> Self {
        Self { trailing_strip }
    }

    /// 将原始消息格式化为结构化的 `UserEvent`
    pub fn format(&self, raw: &str) -> RelayResult<UserEvent> {
        let segments: Vec<&str> = raw.split('"').collect();
        if segments.len() <= SALES_ORG_SEGMENT {
            return Err(RelayError::MalformedMessage {
                expected: SALES_ORG_SEGMENT + 1,
                found: segments.len(),
            });
        }

        let event = UserEvent::builder()
            .maybe_user_event(UserEventType::parse(segments[EVENT_TYPE_SEGMENT]))
            .customer_ids(self.customer_ids(segments[CUSTOMER_ID_SEGMENT]))
            .sales_org(segments[SALES_ORG_SEGMENT].to_string())
            .build();

        Ok(event)
    }

    /// 剥离左侧一个字符与右侧配置宽度后按逗号切分；不做进一步修剪
    fn customer_ids(&self, segment: &str) -> Vec<String> {
        let end = segment.len().saturating_sub(self.trailing_strip.width());
        let inner = segment.get(1..end).unwrap_or("");
        inner.split(',').map(str::to_string).collect()
    }
}
