use crate::domain_event::{DomainEvent, RecordedEvent};
use crate::error::DomainResult;
use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 类型擦除后的派发事件。
///
/// 强类型领域事件经 `from_recorded` 转换；任意可序列化载荷经
/// `from_payload` 进入同一条派发路径，以支持混合事件目录。
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchedEvent {
    event_id: Uuid,
    event_type: String,
    version: usize,
    occurred_at: DateTime<Utc>,
    payload: serde_json::Value,
}

impl DispatchedEvent {
    /// 由已记录的强类型事件转换（标识、版本与时间戳原样保留）
    pub fn from_recorded<E>(event: &RecordedEvent<E>) -> DomainResult<Self>
    where
        E: DomainEvent,
    {
        Ok(Self::builder()
            .event_id(event.event_id())
            .event_type(event.event_type().to_string())
            .version(event.version())
            .occurred_at(*event.occurred_at())
            .payload(serde_json::to_value(event.payload())?)
            .build())
    }

    /// 由任意可序列化载荷构造（无类型家族：新标识、当前时间、版本 0）
    pub fn from_payload<P>(event_type: impl Into<String>, payload: &P) -> DomainResult<Self>
    where
        P: Serialize,
    {
        Ok(Self::builder()
            .event_id(Uuid::new_v4())
            .event_type(event_type.into())
            .version(0)
            .occurred_at(Utc::now())
            .payload(serde_json::to_value(payload)?)
            .build())
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn version(&self) -> usize {
        self.version
    }

    pub fn occurred_at(&self) -> &DateTime<Utc> {
        &self.occurred_at
    }

    pub fn payload(&self) -> &serde_json::Value {
        &self.payload
    }
}
