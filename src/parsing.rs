mod action_parser;
pub mod error;
pub(crate) mod helpers;
mod rly_parser;
mod start_type_parser;
mod ttb_line;

pub use action_parser::{
    parse_action, parse_cdt, parse_fsp, parse_jbo, parse_location, parse_pas, parse_rsp,
};
pub use rly_parser::{
    ABSENT_VALUE, COMPONENT_SEPARATOR, END_OF_TABLE_SENTINEL, FIELD_SEPARATOR,
    INACTIVE_ELEMENTS_SENTINEL, parse_layout_dump,
};
pub use start_type_parser::parse_start_type;
pub use ttb_line::{join, split};
