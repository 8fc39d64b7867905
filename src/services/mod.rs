pub mod session;

pub use session::PaletteSession;

use std::sync::Arc;
use tokio::sync::RwLock;

/// Session shared between request handlers
pub type SharedSession = Arc<RwLock<PaletteSession>>;
