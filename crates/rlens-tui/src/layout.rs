//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header: top border + title row + tabs row + bottom border
pub const HEADER_HEIGHT: u16 = 4;

/// Each input is a bordered single-line box
const INPUT_HEIGHT: u16 = 3;

/// Submit button row plus the validation message row
const FORM_FOOTER_HEIGHT: u16 = 2;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    /// Landing content or the mounted panel
    pub body: Rect,
    /// One-row status bar
    pub status: Rect,
}

/// Areas inside the body when a panel is mounted
#[derive(Debug, Clone, Copy)]
pub struct PanelAreas {
    pub form: Rect,
    pub result: Rect,
}

/// Split the screen into header, body and status bar
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Split a panel body into the input form and the result area
pub fn split_panel(body: Rect, input_count: usize) -> PanelAreas {
    let form_height = INPUT_HEIGHT * input_count as u16 + FORM_FOOTER_HEIGHT;
    let chunks =
        Layout::vertical([Constraint::Length(form_height), Constraint::Min(3)]).split(body);

    PanelAreas {
        form: chunks[0],
        result: chunks[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.status.y, 23);
        assert_eq!(
            layout.header.height + layout.body.height + layout.status.height,
            area.height
        );
    }

    #[test]
    fn test_split_panel_grows_with_inputs() {
        let body = Rect::new(0, 4, 80, 19);

        let one = split_panel(body, 1);
        assert_eq!(one.form.height, 5);
        assert_eq!(one.result.height, 14);

        let two = split_panel(body, 2);
        assert_eq!(two.form.height, 8);
        assert_eq!(two.result.y, 12);
    }
}
