//! Individual command implementations.

mod help;
mod load;
mod quit;
mod suggest;
mod train;

pub use help::HelpCommand;
pub use load::LoadCommand;
pub use quit::QuitCommand;
pub use suggest::SuggestCommand;
pub use train::TrainCommand;

use std::sync::Arc;

use super::command::CommandRegistry;

/// Registers all built-in commands with the registry.
pub fn register_all(registry: &mut CommandRegistry) {
    registry.register(Arc::new(TrainCommand));
    registry.register(Arc::new(SuggestCommand));
    registry.register(Arc::new(LoadCommand));
    registry.register(Arc::new(HelpCommand));
    registry.register(Arc::new(QuitCommand));
}
