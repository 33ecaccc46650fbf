mod commands;
mod comparison;
mod setup;
mod workflows;

pub(crate) use commands::CommandsPane;
pub(crate) use comparison::ComparePane;
pub(crate) use setup::SetupPane;
pub(crate) use workflows::WorkflowsPane;

use ratatui::{Frame, layout::Rect, style::Color};

use pwref_catalog::Catalog;
use pwref_types::{Category, Protocol};

use crate::presentation::formatters::{hex_rgb, protocol_rgb};

use super::app::AppState;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState, catalog: &Catalog);
}

pub(crate) fn protocol_color(protocol: Protocol) -> Color {
    let (r, g, b) = protocol_rgb(protocol);
    Color::Rgb(r, g, b)
}

pub(crate) fn category_color(category: &Category) -> Color {
    hex_rgb(&category.color)
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(Color::White)
}
