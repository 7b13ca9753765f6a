//! Text rendering of a single post.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::caption::ELLIPSIS;
use crate::model::ReactionKind;
use crate::render::post_model::DATE_FORMAT;
use crate::render::{indicators, PostRenderModel};

const ACTIVE_INDICATOR: &str = "●";
const INACTIVE_INDICATOR: &str = "○";

/// Truncate `text` to at most `width` display columns.
pub fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

/// Rows `text` occupies when wrapped at `width` columns.
pub fn wrapped_height(text: &str, width: u16) -> usize {
    if width == 0 {
        return 0;
    }
    let width = usize::from(width);
    text.split('\n')
        .map(|line| line.width().div_ceil(width).max(1))
        .sum()
}

/// Author, handle and date.
pub fn header_line(model: &PostRenderModel, focused: bool) -> Line<'static> {
    let post = model.post();
    let marker = if focused { "> " } else { "  " };
    let name_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let mut spans = vec![
        Span::raw(marker),
        Span::styled(post.author.full_name.clone(), name_style),
        Span::raw(" "),
        Span::styled(post.author.handle.clone(), Style::default().fg(Color::DarkGray)),
        Span::raw(" · "),
        Span::raw(post.posted_at.format(DATE_FORMAT).to_string()),
    ];
    if post.user_posted {
        spans.push(Span::styled(" (you)", Style::default().fg(Color::Green)));
    }
    Line::from(spans)
}

/// Caption as shown in the timeline, honoring the collapsed state.
pub fn caption_lines(model: &PostRenderModel) -> Vec<Line<'static>> {
    let layout = model.caption_layout();
    let collapsed = layout.collapsible && model.caption_collapsed();
    let text = if collapsed {
        layout.preview_text.clone()
    } else {
        layout.full_text()
    };

    let mut lines: Vec<Line<'static>> = text.split('\n').map(|l| Line::from(l.to_string())).collect();
    if collapsed {
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::raw(ELLIPSIS));
            last.spans.push(Span::styled(
                " more",
                Style::default().fg(Color::DarkGray),
            ));
        }
    }
    lines
}

/// Current image and its carousel indicators. Empty when there are no images.
pub fn carousel_line(images: &[String], active: usize, width: usize) -> Option<Line<'static>> {
    let current = images.get(active)?;
    let dots: Vec<&str> = indicators(images.len(), active)
        .into_iter()
        .map(|on| if on { ACTIVE_INDICATOR } else { INACTIVE_INDICATOR })
        .collect();
    let dots = dots.join(" ");

    let label = format!("[image {}/{}] ", active + 1, images.len());
    let room = width.saturating_sub(label.width() + dots.width() + 1);
    Some(Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Magenta)),
        Span::raw(fit_width(current, room)),
        Span::raw(" "),
        Span::raw(dots),
    ]))
}

/// Reaction counters.
pub fn actions_line(model: &PostRenderModel) -> Line<'static> {
    let post = model.post();
    let mut spans = Vec::new();
    for kind in ReactionKind::ALL {
        let count = post.reactions.get(kind);
        let span = match kind {
            ReactionKind::Likes if post.liked => Span::styled(
                format!("♥ {count}"),
                Style::default().fg(Color::Red),
            ),
            ReactionKind::Likes => Span::raw(format!("♡ {count}")),
            other => Span::raw(format!("{} {count}", other.class_name())),
        };
        spans.push(span);
        spans.push(Span::raw("   "));
    }
    spans.pop();
    Line::from(spans)
}

/// Every line of a timeline card.
pub fn post_lines(model: &PostRenderModel, width: u16, focused: bool) -> Vec<Line<'static>> {
    let mut lines = vec![header_line(model, focused)];
    lines.extend(caption_lines(model));
    if let Some(carousel) = carousel_line(&model.post().images, model.carousel_index(), usize::from(width)) {
        lines.push(carousel);
    }
    lines.push(actions_line(model));
    lines
}
