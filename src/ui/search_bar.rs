use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

pub struct SearchBar<'a> {
    pub input: &'a str,
}

impl<'a> Widget for SearchBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let block = Block::default()
            .title(" GitHub Profile Finder ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACTIVE_BORDER));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let line = Line::from(vec![
            Span::styled(
                " @ ",
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(self.input.to_string()),
            Span::styled("\u{258c}", Style::default().fg(theme::ACCENT)),
        ]);
        buf.set_line(inner.x, inner.y, &line, inner.width);
    }
}
