pub mod convert;
pub mod export;
pub mod palette;
pub mod rule;
pub mod saved;
pub mod validate;

pub use convert::{handle_convert, ConvertResponse, __path_handle_convert};
pub use export::{handle_export, __path_handle_export};
pub use palette::{__path_handle_commit, __path_handle_generate, __path_handle_get_palette};
pub use palette::{__path_handle_redo, __path_handle_undo};
pub use palette::{
    handle_commit, handle_generate, handle_get_palette, handle_redo, handle_undo, CommitRequest,
    GenerateRequest, PaletteResponse,
};
pub use rule::{handle_get_rule, handle_set_rule, RuleRequest, RuleResponse};
pub use rule::{__path_handle_get_rule, __path_handle_set_rule};
pub use saved::{handle_list_saved, handle_save, SavedResponse};
pub use saved::{__path_handle_list_saved, __path_handle_save};
