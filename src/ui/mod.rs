//! UI 模块
//!
//! 采用 MVI (Model-View-Intent) 架构：
//! - Model (state.rs): UiState 不可变状态与 App
//! - Update (logic.rs): 纯 reducer 与 dispatch
//! - View (view/): 纯函数，将 State 映射为 UI
//! - Intent (actions.rs): 用户交互转化为明确的语义化 Action
//! - Effects (effects.rs): 分析请求

pub mod actions;
pub mod effects;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

// Re-export for convenience
pub use actions::{Action, Event, Flow};
pub use effects::{perform_analysis, spawn_analysis};
pub use input::handle_key_event;
pub use state::App;
pub use view::render;
