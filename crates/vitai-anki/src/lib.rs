mod template;
mod writer;

pub use template::{
    CARDS_HEADER, EMPTY_FIELD, audio_field, audio_file_name, format_definitions, format_examples,
    format_row, strip_quotes,
};
pub use writer::{CardsFile, WriteError};
