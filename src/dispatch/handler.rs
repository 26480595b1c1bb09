use super::DispatchedEvent;
use async_trait::async_trait;

/// 处理器订阅的事件类型范围
#[derive(Clone, Debug)]
pub enum HandledEventType {
    One(String),
    Many(Vec<String>),
    All,
}

impl HandledEventType {
    /// 判断给定事件类型是否在订阅范围内
    pub fn matches(&self, event_type: &str) -> bool {
        match self {
            Self::One(t) => t == event_type,
            Self::Many(types) => types.iter().any(|t| t == event_type),
            Self::All => true,
        }
    }
}

/// 事件处理器：处理某一类型的事件
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// 处理器名称（用于失败定位与审计）
    fn handler_name(&self) -> &str;
    /// 返回该处理器支持的事件类型
    fn handled_event_type(&self) -> HandledEventType;
    /// 处理事件
    async fn handle(&self, event: &DispatchedEvent) -> anyhow::Result<()>;
}
