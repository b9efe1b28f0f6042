// ABOUTME: Slide rendering module for the weekly-deck application
// ABOUTME: Turns parsed tasks into a typed deck with fixed layout and typography

use crate::config::Config;
use crate::deck::{inches, Align, Deck, Paragraph, Slide, TextBox};
use crate::parser::Task;
use crate::script::contains_cjk;
use log::info;

/// Font sizes, in hundredths of a point.
const TITLE_SLIDE_SIZE: u32 = 3200;
const TASK_TITLE_SIZE: u32 = 2400;
const SECTION_HEADER_SIZE: u32 = 1800;
const CONTENT_SIZE: u32 = 1400;

/// Paragraph trailing space, in hundredths of a point.
const SECTION_HEADER_SPACE_AFTER: u32 = 600;
const CONTENT_SPACE_AFTER: u32 = 300;

/// Canonical sections in display order. Subsections with any other title are
/// parsed but never rendered; iterating this list per slide is what makes
/// the display order independent of the order they appeared in the source.
pub const SECTION_ORDER: [(&str, &str); 4] = [
    ("Objective", "目標"),
    ("本週進度", "進度"),
    ("困難", "困難"),
    ("解決方案", "解決方案/方向"),
];

/// Build the deck for a weekly report: one title slide, then one slide per
/// task in document order.
pub fn build_deck(week_label: &str, tasks: &[Task], config: &Config) -> Deck {
    let title = format!("Week {} 週報", week_label);
    info!("Building deck \"{}\" with {} task slides", title, tasks.len());

    let mut deck = Deck::new(title.clone());
    deck.slides.push(title_slide(&title, config));
    for task in tasks {
        deck.slides.push(task_slide(task, config));
    }
    deck
}

/// Pick the font face for a run of text. Section headers bypass this and
/// always use the CJK face.
fn face<'a>(text: &str, config: &'a Config) -> &'a str {
    if contains_cjk(text) {
        &config.cjk_font
    } else {
        &config.latin_font
    }
}

fn title_slide(title: &str, config: &Config) -> Slide {
    Slide {
        boxes: vec![TextBox {
            x: inches(1.0),
            y: inches(3.0),
            width: inches(8.0),
            height: inches(1.5),
            word_wrap: false,
            paragraphs: vec![Paragraph {
                text: title.to_string(),
                size: TITLE_SLIDE_SIZE,
                bold: true,
                // The title carries the localized 週報 suffix, so the CJK
                // face is always correct here.
                font: config.cjk_font.clone(),
                level: 0,
                align: Align::Center,
                space_after: 0,
            }],
        }],
    }
}

fn task_slide(task: &Task, config: &Config) -> Slide {
    let title_box = TextBox {
        x: inches(0.5),
        y: inches(0.3),
        width: inches(9.0),
        height: inches(0.6),
        word_wrap: false,
        paragraphs: vec![Paragraph {
            text: task.name.clone(),
            size: TASK_TITLE_SIZE,
            bold: true,
            font: face(&task.name, config).to_string(),
            level: 0,
            align: Align::Left,
            space_after: 0,
        }],
    };

    let mut paragraphs = Vec::new();
    let mut first_section = true;
    for (key, display) in SECTION_ORDER {
        let Some(lines) = task.section(key) else {
            continue;
        };

        if !first_section {
            paragraphs.push(Paragraph::spacer());
        }
        first_section = false;

        paragraphs.push(Paragraph {
            text: display.to_string(),
            size: SECTION_HEADER_SIZE,
            bold: true,
            font: config.cjk_font.clone(),
            level: 0,
            align: Align::Left,
            space_after: SECTION_HEADER_SPACE_AFTER,
        });

        for line in lines {
            paragraphs.push(Paragraph {
                text: line.clone(),
                size: CONTENT_SIZE,
                bold: false,
                font: face(line, config).to_string(),
                level: 1,
                align: Align::Left,
                space_after: CONTENT_SPACE_AFTER,
            });
        }
    }

    let content_box = TextBox {
        x: inches(0.5),
        y: inches(1.0),
        width: inches(9.0),
        height: inches(6.0),
        word_wrap: true,
        paragraphs,
    };

    Slide {
        boxes: vec![title_box, content_box],
    }
}

/// The fixed typography summary printed after generation.
pub fn typography_summary() -> &'static str {
    "Section headers: 18pt, Content: 14pt (no icons, add bullets in PowerPoint)"
}
