pub mod bindings;
pub mod blocks;
pub mod components;
pub mod data_model;
pub mod encoding;
pub mod examples;
pub mod messages;
pub mod prompts;
pub mod validator;

pub use bindings::{DynamicNumber, DynamicString};
pub use blocks::{BlockError, ExampleBlock, find_block, parse_blocks};
pub use components::{
    button, card, column, google_map_pins, google_map_route, list_template, place_card, text,
};
pub use data_model::{DataModelEntry, DataModelValue};
pub use encoding::{decode_example_messages, encode_example_block, encode_example_blocks};
pub use examples::{GET_DIRECTIONS_EXAMPLE, RESTAURANT_UI_EXAMPLES, SINGLE_COLUMN_LIST_EXAMPLE};
pub use messages::{
    A2uiMessage,
    BeginRendering,
    BeginRenderingMessage,
    ComponentEntry,
    DataModelUpdate,
    DataModelUpdateMessage,
    DeleteSurface,
    DeleteSurfaceMessage,
    SurfaceStyles,
    SurfaceUpdate,
    SurfaceUpdateMessage,
};
pub use prompts::{UI_EXAMPLES_GUIDANCE, examples_prompt};
pub use validator::{A2uiValidationError, A2uiValidator, check_example_integrity};
