//! 内存版事件派发器（InMemoryDispatcher）
//!
//! 基于处理器注册表的 `EventDispatcher` 实现：
//! - 处理器按注册顺序保存，投递时按序匹配事件类型并逐个 await；
//! - 处理器失败映射为 `DomainError::EventHandler` 并立即上抛；
//! - 典型用途：测试环境、示例与单进程应用。
//!
use super::{DispatchedEvent, EventDispatcher, EventHandler};
use crate::error::{DomainError, DomainResult};
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// 简单的处理器注册表派发实现
#[derive(Clone, Default)]
pub struct InMemoryDispatcher {
    handlers: Vec<Arc<dyn EventHandler>>,
}

impl InMemoryDispatcher {
    /// 以注册顺序保存一组处理器
    pub fn new(handlers: Vec<Arc<dyn EventHandler>>) -> Self {
        Self { handlers }
    }

    /// 追加注册一个处理器（投递顺序即注册顺序）
    pub fn register(&mut self, handler: Arc<dyn EventHandler>) {
        self.handlers.push(handler);
    }
}

#[async_trait]
impl EventDispatcher for InMemoryDispatcher {
    async fn dispatch(
        &self,
        event: &DispatchedEvent,
        cancellation: &CancellationToken,
    ) -> DomainResult<()> {
        if cancellation.is_cancelled() {
            return Err(DomainError::DispatchCancelled {
                delivered: 0,
                remaining: 1,
            });
        }
        for handler in &self.handlers {
            if !handler.handled_event_type().matches(event.event_type()) {
                continue;
            }
            handler
                .handle(event)
                .await
                .map_err(|e| DomainError::EventHandler {
                    handler: handler.handler_name().to_string(),
                    reason: e.to_string(),
                })?;
        }
        Ok(())
    }
}
