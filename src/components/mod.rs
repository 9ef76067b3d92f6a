//! Reusable UI components

pub mod chat_input;
pub mod chat_message;
pub mod footer;
pub mod framework_selector;
pub mod guard;
pub mod header;
pub mod loading;
pub mod result_viewer;
pub mod sidebar;

pub use chat_input::ChatInput;
pub use chat_message::ChatMessage;
pub use footer::Footer;
pub use framework_selector::FrameworkSelector;
pub use guard::ProtectedRoute;
pub use header::Header;
pub use loading::{LoadingOverlay, LoadingSpinner};
pub use result_viewer::ResultViewer;
pub use sidebar::Sidebar;
