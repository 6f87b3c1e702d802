// SPDX-License-Identifier: GPL-3.0-only

//! Composition of gauges into the small, medium and large widget templates.

use tracing::warn;

use crate::palette::{Rgba, BACKGROUND, LIGHT_GRAY};
use crate::progress::ProgressRecord;
use crate::render::{render_bar, render_ring, RenderedImage, BAR_HEIGHT};

pub const TITLE: &str = "Time Progress";
pub const WIDGET_PADDING: f32 = 12.0;

const SMALL_RING: u32 = 120;
const LARGE_RING: u32 = 100;
const BAR_WIDTH: u32 = 160;
const ROW_LABEL_WIDTH: f32 = 50.0;

/// Display size requested by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutSize {
    Small,
    Medium,
    #[default]
    Large,
}

impl LayoutSize {
    /// Parses a host selector. Matching is exact; anything else picks the
    /// large layout.
    pub fn from_selector(selector: &str) -> Self {
        match selector {
            "small" => LayoutSize::Small,
            "medium" => LayoutSize::Medium,
            _ => LayoutSize::Large,
        }
    }

    pub fn as_selector(self) -> &'static str {
        match self {
            LayoutSize::Small => "small",
            LayoutSize::Medium => "medium",
            LayoutSize::Large => "large",
        }
    }

    pub fn next(self) -> Self {
        match self {
            LayoutSize::Small => LayoutSize::Medium,
            LayoutSize::Medium => LayoutSize::Large,
            LayoutSize::Large => LayoutSize::Small,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Medium,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Leading,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub weight: FontWeight,
    pub color: Rgba,
    pub align: TextAlign,
    /// Fixed column width, if any.
    pub width: Option<f32>,
}

impl TextStyle {
    fn medium(size: f32, color: Rgba) -> Self {
        Self {
            size,
            weight: FontWeight::Medium,
            color,
            align: TextAlign::Leading,
            width: None,
        }
    }

    fn bold(size: f32, color: Rgba) -> Self {
        Self {
            weight: FontWeight::Bold,
            ..Self::medium(size, color)
        }
    }

    fn centered(self) -> Self {
        Self {
            align: TextAlign::Center,
            ..self
        }
    }
}

/// Node of the composed visual tree handed to the host.
#[derive(Debug, PartialEq)]
pub enum Node {
    /// Children stacked top to bottom.
    Column { centered: bool, children: Vec<Node> },
    /// Children laid out left to right, vertically centered.
    Row(Vec<Node>),
    Image(RenderedImage),
    Text { content: String, style: TextStyle },
    /// Fixed gap in pixels, or a flexible gap taking the remaining space.
    Spacer(Option<f32>),
}

/// Root of the visual tree.
#[derive(Debug, PartialEq)]
pub struct Widget {
    pub size: LayoutSize,
    pub background: Rgba,
    pub padding: f32,
    pub body: Node,
}

/// Builds the template for `size` from the Day, Week, Month, Year records.
pub fn compose(records: &[ProgressRecord; 4], size: LayoutSize) -> Widget {
    let body = match size {
        LayoutSize::Small => small(records),
        LayoutSize::Medium => medium(records),
        LayoutSize::Large => large(records),
    };

    Widget {
        size,
        background: BACKGROUND,
        padding: WIDGET_PADDING,
        body,
    }
}

fn small(records: &[ProgressRecord; 4]) -> Node {
    let day = &records[0];
    Node::Column {
        centered: true,
        children: vec![
            Node::Spacer(None),
            ring(day, SMALL_RING),
            Node::Spacer(Some(6.0)),
            caption(day.label),
            Node::Spacer(None),
        ],
    }
}

fn medium(records: &[ProgressRecord; 4]) -> Node {
    let mut children = vec![
        Node::Text {
            content: TITLE.to_string(),
            style: TextStyle::bold(16.0, Rgba::WHITE),
        },
        Node::Spacer(Some(10.0)),
    ];

    for record in records {
        children.push(Node::Row(vec![
            Node::Text {
                content: record.label.to_string(),
                style: TextStyle {
                    width: Some(ROW_LABEL_WIDTH),
                    ..TextStyle::medium(13.0, LIGHT_GRAY)
                },
            },
            Node::Spacer(Some(6.0)),
            bar(record),
            Node::Spacer(Some(6.0)),
            Node::Text {
                content: record.percent_text(),
                style: TextStyle::medium(12.0, Rgba::WHITE),
            },
        ]));
        children.push(Node::Spacer(Some(8.0)));
    }

    Node::Column {
        centered: false,
        children,
    }
}

fn large(records: &[ProgressRecord; 4]) -> Node {
    let [day, week, month, year] = records;

    let ring_item = |record: &ProgressRecord| Node::Column {
        centered: true,
        children: vec![
            ring(record, LARGE_RING),
            Node::Spacer(Some(6.0)),
            caption(record.label),
        ],
    };
    let pair = |a: &ProgressRecord, b: &ProgressRecord| {
        Node::Row(vec![ring_item(a), Node::Spacer(None), ring_item(b)])
    };

    Node::Column {
        centered: false,
        children: vec![
            Node::Text {
                content: TITLE.to_string(),
                style: TextStyle::bold(20.0, Rgba::WHITE).centered(),
            },
            Node::Spacer(Some(12.0)),
            pair(day, week),
            Node::Spacer(Some(14.0)),
            pair(month, year),
        ],
    }
}

fn caption(label: &str) -> Node {
    Node::Text {
        content: label.to_string(),
        style: TextStyle::medium(14.0, LIGHT_GRAY).centered(),
    }
}

fn ring(record: &ProgressRecord, diameter: u32) -> Node {
    match render_ring(record.fraction, record.color, diameter) {
        Some(image) => Node::Image(image),
        None => {
            warn!(label = record.label, diameter, "could not render ring gauge");
            Node::Spacer(Some(diameter as f32))
        }
    }
}

fn bar(record: &ProgressRecord) -> Node {
    match render_bar(record.fraction, record.color, BAR_WIDTH) {
        Some(image) => Node::Image(image),
        None => {
            warn!(label = record.label, "could not render bar gauge");
            Node::Spacer(Some(BAR_HEIGHT as f32))
        }
    }
}
