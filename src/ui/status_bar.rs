use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBar<'a> {
    pub state_label: &'a str,
    pub last_sync: &'a str,
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let bg = Style::default().bg(theme::STATUS_BG);
        for x in area.x..area.right() {
            buf[(x, area.y)].set_style(bg);
        }

        let sep = Span::styled(
            "\u{2502}",
            Style::default()
                .fg(theme::BORDER_COLOR)
                .bg(theme::STATUS_BG),
        );

        let line = Line::from(vec![
            Span::styled(
                " octoview ",
                Style::default()
                    .fg(theme::ACCENT)
                    .bg(theme::STATUS_BG)
                    .add_modifier(Modifier::BOLD),
            ),
            sep.clone(),
            Span::styled(format!(" {} ", self.state_label), bg),
            sep.clone(),
            Span::styled(format!(" synced: {} ", self.last_sync), bg),
            sep,
            Span::styled(
                " Enter search \u{00b7} C-r retry \u{00b7} Esc quit",
                Style::default().fg(theme::DIM_TEXT).bg(theme::STATUS_BG),
            ),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
