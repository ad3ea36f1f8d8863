mod focus;
mod tooltip;

pub use focus::{FocusController, FocusLayout, FocusPhase, FocusState, PointerEvent};
pub use tooltip::{
    format_tooltip_date, format_tooltip_price, tooltip_date_line, tooltip_price_line,
};
