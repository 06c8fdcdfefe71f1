use bon::Builder;
use serde::{Deserialize, Serialize};

use super::UserEventType;

/// 格式化后的用户事件记录
///
/// 值对象：无自身标识，仅以字段值相等为准；每次调用创建一次，
/// 序列化并发布后即丢弃，不做持久化。序列化为 camelCase JSON，
/// 与下游消费方的字段约定保持一致。
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEvent {
    /// 事件类型；未识别的令牌以 None 表示，并在序列化时省略
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_event: Option<UserEventType>,
    /// 客户 ID 列表（保持输入顺序，不做修剪或类型转换）
    customer_ids: Vec<String>,
    /// 销售组织，原样透传
    sales_org: String,
}

impl UserEvent {
    pub fn user_event(&self) -> Option<UserEventType> {
        self.user_event
    }

    pub fn customer_ids(&self) -> &[String] {
        &self.customer_ids
    }

    pub fn sales_org(&self) -> &str {
        &self.sales_org
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(user_event: Option<UserEventType>) -> UserEvent {
        UserEvent::builder()
            .maybe_user_event(user_event)
            .customer_ids(vec!["0700376380".to_string()])
            .sales_org("BCAR".to_string())
            .build()
    }

    // 测试 camelCase 序列化形状
    #[test]
    fn test_serialize_shape() {
        let event = sample(Some(UserEventType::Login));
        let value = serde_json::to_value(&event).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "userEvent": "LOGIN",
                "customerIds": ["0700376380"],
                "salesOrg": "BCAR",
            })
        );
    }

    // 测试未识别事件类型在序列化时省略 userEvent 字段
    #[test]
    fn test_unknown_event_type_omitted() {
        let event = sample(None);
        let value = serde_json::to_value(&event).unwrap();

        assert!(value.get("userEvent").is_none());
        assert_eq!(value["salesOrg"], "BCAR");
    }

    // 测试反序列化时缺失 userEvent 字段按 None 处理
    #[test]
    fn test_deserialize_missing_event_type() {
        let json = r#"{"customerIds":["111","222"],"salesOrg":"BCAR"}"#;
        let event: UserEvent = serde_json::from_str(json).unwrap();

        assert_eq!(event.user_event(), None);
        assert_eq!(event.customer_ids(), ["111", "222"]);
    }

    // 测试值相等语义
    #[test]
    fn test_value_equality() {
        assert_eq!(
            sample(Some(UserEventType::Login)),
            sample(Some(UserEventType::Login))
        );
        assert_ne!(sample(Some(UserEventType::Login)), sample(None));
    }
}
