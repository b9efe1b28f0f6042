// ABOUTME: Library module for the weekly-deck program.
// ABOUTME: Contains core functionality for parsing status markdown and generating PPTX decks.

// Reexport modules
pub mod config;
pub mod deck;
pub mod errors;
pub mod parser;
pub mod pptx;
pub mod render;
pub mod script;
pub mod session;
pub mod utils;

// Reexport common types and functions
pub use config::Config;
pub use deck::{Deck, Paragraph, Slide, TextBox};
pub use errors::{DeckError, Result};
pub use parser::{parse, Task};
pub use pptx::write_pptx;
pub use render::{build_deck, typography_summary, SECTION_ORDER};
pub use script::contains_cjk;
pub use session::log_session;
