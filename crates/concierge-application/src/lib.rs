pub mod bootstrap;
pub mod chat_service;
pub mod session;
pub mod telemetry;
pub mod tool_panel;

pub use bootstrap::{build_runtime, ChatRuntime};
pub use chat_service::ChatService;
pub use session::SessionUseCase;
pub use telemetry::Telemetry;
pub use tool_panel::{PanelState, PanelView, ToolPanel};
