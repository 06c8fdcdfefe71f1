use serde::{Deserialize, Serialize};
use std::fmt;

/// 用户事件类型（封闭集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserEventType {
    Login,
    PlaceOrder,
}

impl UserEventType {
    /// 按原始令牌精确匹配；未识别的令牌返回 None（非错误）
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "LOGIN" => Some(Self::Login),
            "PLACE_ORDER" => Some(Self::PlaceOrder),
            _ => None,
        }
    }

    /// 事件类型的原始令牌形式
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "LOGIN",
            Self::PlaceOrder => "PLACE_ORDER",
        }
    }
}

impl fmt::Display for UserEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
