//! 基础设施层
//!
//! 持有共享资源（题库存储、随机源），只暴露能力，不包含业务规则。

pub mod memory_store;
pub mod random;
pub mod store;

pub use memory_store::MemoryStore;
pub use random::{choose, FixedChoice, RandomChoice, ThreadRandom};
pub use store::QuestionStore;
