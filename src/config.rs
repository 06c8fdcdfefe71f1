//! 运行环境配置
//!
//! 从进程环境变量装配中继所需的外部传输标识与丢弃开关。
//! 连接串与消费组仅作为透传给外部客户端的标识，本 crate 不做格式校验。
//!
use crate::error::RelayResult;
use config::{Config, Environment};
use serde::Deserialize;

/// 默认环境变量前缀（如 `USER_EVENTS_DISCARD_EVENTS`）
pub const DEFAULT_ENV_PREFIX: &str = "USER_EVENTS";

/// 中继配置总结构
#[derive(Debug, Deserialize, Clone)]
pub struct RelaySettings {
    /// 丢弃开关：为 true 时跳过全部处理直接返回
    #[serde(default)]
    pub discard_events: bool,
    /// 外部传输的连接串（透传）
    pub connection_string: String,
    /// 输出事件流名称
    pub event_hub_name: String,
    /// 消费组标识（透传）
    pub consumer_group: String,
}

impl RelaySettings {
    /// 以默认前缀从进程环境装配配置
    pub fn from_env() -> RelayResult<Self> {
        Self::from_env_prefixed(DEFAULT_ENV_PREFIX)
    }

    /// 以指定前缀从进程环境装配配置（便于测试隔离）
    pub fn from_env_prefixed(prefix: &str) -> RelayResult<Self> {
        let settings = Config::builder()
            .set_default("discard_events", false)?
            .add_source(Environment::with_prefix(prefix).try_parsing(true))
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RelayError;

    // 测试内设置进程环境变量；每个用例使用独立前缀避免相互干扰
    fn set_var(key: &str, value: &str) {
        unsafe { std::env::set_var(key, value) };
    }

    // 从环境变量装配完整配置
    #[test]
    fn test_settings_from_env() {
        set_var("UER_TEST_A_DISCARD_EVENTS", "true");
        set_var("UER_TEST_A_CONNECTION_STRING", "Endpoint=sb://localhost");
        set_var("UER_TEST_A_EVENT_HUB_NAME", "USER_EVENTS");
        set_var("UER_TEST_A_CONSUMER_GROUP", "$Default");

        let settings = RelaySettings::from_env_prefixed("UER_TEST_A").unwrap();

        assert!(settings.discard_events);
        assert_eq!(settings.connection_string, "Endpoint=sb://localhost");
        assert_eq!(settings.event_hub_name, "USER_EVENTS");
        assert_eq!(settings.consumer_group, "$Default");
    }

    // 丢弃开关缺省为 false
    #[test]
    fn test_discard_flag_defaults_to_false() {
        set_var("UER_TEST_B_CONNECTION_STRING", "Endpoint=sb://localhost");
        set_var("UER_TEST_B_EVENT_HUB_NAME", "USER_EVENTS");
        set_var("UER_TEST_B_CONSUMER_GROUP", "$Default");

        let settings = RelaySettings::from_env_prefixed("UER_TEST_B").unwrap();

        assert!(!settings.discard_events);
    }

    // 缺失必填项时返回配置错误
    #[test]
    fn test_missing_required_fields_fail() {
        let err = RelaySettings::from_env_prefixed("UER_TEST_C").unwrap_err();

        assert!(matches!(err, RelayError::Config { .. }));
    }
}
