//! 事件派发子系统（dispatch）
//!
//! 提供把已记录的领域事件投递给外部处理器的协议与内存实现：
//! - `DispatchedEvent`：类型擦除后的事件形态，承载标识/类型/版本/时间戳与 JSON 载荷；
//! - `EventHandler`：消费某类/多类/全部事件的处理逻辑与元信息；
//! - `EventDispatcher`：严格顺序投递（逐条 await），失败即止，支持协作取消；
//! - `DispatchDomainEvents`：强类型事件的便捷派发扩展；
//! - `InMemoryDispatcher`：基于处理器注册表的内存实现。
//!
//! 派发不具备事务性：批量中途失败时，已投递事件不回滚、后续事件不投递；
//! 需要原子性的调用方应配合 Outbox 模式使用。
//!
mod dispatched_event;
mod dispatcher;
mod handler;
mod inmemory;

pub use dispatched_event::DispatchedEvent;
pub use dispatcher::{DispatchDomainEvents, EventDispatcher};
pub use handler::{EventHandler, HandledEventType};
pub use inmemory::InMemoryDispatcher;
