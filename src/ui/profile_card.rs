use crate::app::View;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

/// The display surface. Immediate-mode rendering means every frame fully
/// overwrites the card area, so exactly one state is ever visible.
pub struct ProfileCard<'a> {
    pub view: &'a View,
}

impl<'a> Widget for ProfileCard<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER_COLOR));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 4 || inner.height < 1 {
            return;
        }

        match self.view {
            View::Empty => {
                let line = Line::from(Span::styled(
                    "Type a username and press Enter.",
                    Style::default().fg(theme::DIM_TEXT),
                ));
                buf.set_line(inner.x + 1, inner.y, &line, inner.width);
            }
            View::Loading => {
                let line = Line::from(Span::styled(
                    "Searching\u{2026}",
                    Style::default().fg(theme::DIM_TEXT),
                ));
                buf.set_line(inner.x + 1, inner.y, &line, inner.width);
            }
            View::Error => {
                let headline = Line::from(Span::styled(
                    "No user found.",
                    Style::default()
                        .fg(theme::ERROR_FG)
                        .add_modifier(Modifier::BOLD),
                ));
                buf.set_line(inner.x + 1, inner.y, &headline, inner.width);
                if inner.height > 1 {
                    let hint = Line::from(Span::raw("Check the spelling and try again."));
                    buf.set_line(inner.x + 1, inner.y + 1, &hint, inner.width);
                }
            }
            View::Profile(profile) => {
                let x = inner.x + 1;
                let w = inner.width.saturating_sub(2) as usize;
                let mut y = inner.y;
                let bottom = inner.bottom();

                let mut put = |y: &mut u16, line: Line| {
                    if *y < bottom {
                        buf.set_line(x, *y, &line, w as u16);
                        *y += 1;
                    }
                };

                put(
                    &mut y,
                    Line::from(vec![
                        Span::styled("Avatar ", Style::default().fg(theme::ACCENT)),
                        Span::styled(
                            super::truncate_with_ellipsis(&profile.avatar_url, w.saturating_sub(7)),
                            Style::default().fg(theme::DIM_TEXT),
                        ),
                    ]),
                );
                put(
                    &mut y,
                    Line::from(Span::styled(
                        profile.display_name().to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                );
                put(
                    &mut y,
                    Line::from(vec![
                        Span::styled(
                            format!("@{}", profile.login),
                            Style::default().fg(theme::LINK_COLOR),
                        ),
                        Span::raw("  "),
                        Span::styled(
                            super::truncate_with_ellipsis(&profile.html_url, w.saturating_sub(profile.login.len() + 3)),
                            Style::default().fg(theme::DIM_TEXT),
                        ),
                    ]),
                );
                put(&mut y, Line::default());
                put(
                    &mut y,
                    Line::from(Span::raw(super::truncate_with_ellipsis(
                        profile.bio_text(),
                        w,
                    ))),
                );
                put(&mut y, Line::default());

                let stat = |value: u64, label: &str| {
                    vec![
                        Span::styled(
                            value.to_string(),
                            Style::default()
                                .fg(theme::STAT_VALUE)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!(" {label}   "),
                            Style::default().fg(theme::DIM_TEXT),
                        ),
                    ]
                };
                let mut spans = stat(profile.public_repos, "Repos");
                spans.extend(stat(profile.followers, "Followers"));
                spans.extend(stat(profile.following, "Following"));
                put(&mut y, Line::from(spans));
            }
        }
    }
}
