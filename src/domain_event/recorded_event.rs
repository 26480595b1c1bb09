use super::DomainEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 事件记录：为载荷补充事件标识、聚合版本与发生时间。
///
/// 标识与时间戳在构造时一次性捕获，此后保持不变；版本由所属实体在
/// `apply_new` 时赋值一次（历史事件则由 `rehydrate` 携带入库时的版本）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct RecordedEvent<E>
where
    E: DomainEvent,
{
    event_id: Uuid,
    version: usize,
    occurred_at: DateTime<Utc>,
    payload: E,
}

impl<E> RecordedEvent<E>
where
    E: DomainEvent,
{
    /// 记录一个新发生的事件：捕获事件标识与当前 UTC 时间，版本待实体赋值
    pub fn new(payload: E) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            version: 0,
            occurred_at: Utc::now(),
            payload,
        }
    }

    /// 从存储还原一条历史事件（标识、版本与时间戳均来自历史记录）
    pub fn rehydrate(event_id: Uuid, version: usize, occurred_at: DateTime<Utc>, payload: E) -> Self {
        Self {
            event_id,
            version,
            occurred_at,
            payload,
        }
    }

    /// 事件唯一标识
    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    /// 事件类型（委托给载荷）
    pub fn event_type(&self) -> &str {
        self.payload.event_type()
    }

    /// 事件对应的聚合版本（0 表示尚未赋值）
    pub fn version(&self) -> usize {
        self.version
    }

    /// 事件发生时间（UTC）
    pub fn occurred_at(&self) -> &DateTime<Utc> {
        &self.occurred_at
    }

    /// 事件载荷
    pub fn payload(&self) -> &E {
        &self.payload
    }

    /// 取出事件载荷
    pub fn into_payload(self) -> E {
        self.payload
    }

    // 版本只允许由所属实体赋值一次
    pub(crate) fn assign_version(&mut self, version: usize) {
        debug_assert_eq!(self.version, 0, "event version is assigned exactly once");
        self.version = version;
    }
}

impl<E> From<E> for RecordedEvent<E>
where
    E: DomainEvent,
{
    fn from(payload: E) -> Self {
        Self::new(payload)
    }
}
