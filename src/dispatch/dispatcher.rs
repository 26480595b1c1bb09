use super::DispatchedEvent;
use crate::domain_event::{DomainEvent, RecordedEvent};
use crate::error::{DomainError, DomainResult};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// 事件派发器：把事件按给定顺序投递给所有感兴趣的处理器。
///
/// 投递语义：
/// - 严格顺序：逐条 await，前一条投递完成后才开始下一条（非并行、非发后不理）；
/// - 失败即止：首个处理器失败原样上抛，批量中的后续事件不再投递；
/// - 协作取消：在相邻投递之间检查取消信号，取消后不重试已投递事件。
#[async_trait]
pub trait EventDispatcher: Send + Sync {
    /// 投递单条事件
    async fn dispatch(
        &self,
        event: &DispatchedEvent,
        cancellation: &CancellationToken,
    ) -> DomainResult<()>;

    /// 按给定顺序逐条投递一批事件
    async fn dispatch_batch(
        &self,
        events: &[DispatchedEvent],
        cancellation: &CancellationToken,
    ) -> DomainResult<()> {
        for (delivered, event) in events.iter().enumerate() {
            if cancellation.is_cancelled() {
                return Err(DomainError::DispatchCancelled {
                    delivered,
                    remaining: events.len() - delivered,
                });
            }
            self.dispatch(event, cancellation).await?;
        }
        Ok(())
    }
}

/// 强类型领域事件的便捷派发扩展：先转换为 `DispatchedEvent` 再投递
#[async_trait]
pub trait DispatchDomainEvents: EventDispatcher {
    /// 投递单条已记录事件
    async fn dispatch_recorded<E>(
        &self,
        event: &RecordedEvent<E>,
        cancellation: &CancellationToken,
    ) -> DomainResult<()>
    where
        E: DomainEvent,
    {
        let event = DispatchedEvent::from_recorded(event)?;
        self.dispatch(&event, cancellation).await
    }

    /// 按给定顺序投递一批已记录事件（典型输入：`uncommitted_changes()`）
    async fn dispatch_recorded_batch<E>(
        &self,
        events: &[RecordedEvent<E>],
        cancellation: &CancellationToken,
    ) -> DomainResult<()>
    where
        E: DomainEvent,
    {
        let events = events
            .iter()
            .map(DispatchedEvent::from_recorded)
            .collect::<DomainResult<Vec<_>>>()?;
        self.dispatch_batch(&events, cancellation).await
    }
}

impl<D> DispatchDomainEvents for D where D: EventDispatcher + ?Sized {}
