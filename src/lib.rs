// SPDX-License-Identifier: GPL-3.0-only

mod backend;
mod cache;
mod config;
pub mod layout;
pub mod palette;
pub mod progress;
pub mod render;

use backend::clock;
use cache::{progress_step, RenderCache};
use chrono::NaiveDateTime;
use config::{TimeProgressConfig, REFRESH_INTERVAL_RANGE};
use cosmic::{
    Element, Task, app,
    app::Core,
    applet::{menu_button, padded_control},
    cosmic_config::CosmicConfigEntry,
    cosmic_theme::Spacing,
    iced::{
        Alignment, Background, Border, Color, Length, Subscription,
        alignment::Horizontal,
        font::Weight,
        platform_specific::shell::wayland::commands::popup::{destroy_popup, get_popup},
        widget::image,
        window::Id,
    },
    iced_widget::{Column, Image, Row, Space, column, container, row},
    theme,
    widget::{button, divider, horizontal_space, slider, text, toggler, vertical_space},
};
use layout::{FontWeight, LayoutSize, Node, TextAlign, TextStyle, Widget};
use palette::{Palette, Rgba};
use progress::progress_records;
use render::{render_ring, RenderedImage};
use tracing::{debug, warn};

pub fn run() -> cosmic::iced::Result {
    cosmic::applet::run::<TimeProgressApplet>(())
}

/// Side of the day ring shown in the panel. Too small for the inner label,
/// so the percentage goes next to it when `show_percentage_text` is set.
const PANEL_RING_SIZE: u32 = 32;
const CORNER_RADIUS: f32 = 16.0;

/// Uploaded image plus its pixel size; cloning keeps the same GPU texture
#[derive(Clone)]
struct ImageData {
    handle: image::Handle,
    width: u32,
    height: u32,
}

impl From<RenderedImage> for ImageData {
    fn from(image: RenderedImage) -> Self {
        let (width, height) = (image.width(), image.height());
        Self {
            handle: image::Handle::from_rgba(width, height, image.into_rgba()),
            width,
            height,
        }
    }
}

/// Composed tree with its images already turned into handles
enum Prepared {
    Column { centered: bool, children: Vec<Prepared> },
    Row(Vec<Prepared>),
    Image(ImageData),
    Text { content: String, style: TextStyle },
    Spacer(Option<f32>),
}

impl From<Node> for Prepared {
    fn from(node: Node) -> Self {
        match node {
            Node::Column { centered, children } => Prepared::Column {
                centered,
                children: children.into_iter().map(Prepared::from).collect(),
            },
            Node::Row(children) => Prepared::Row(children.into_iter().map(Prepared::from).collect()),
            Node::Image(image) => Prepared::Image(image.into()),
            Node::Text { content, style } => Prepared::Text { content, style },
            Node::Spacer(gap) => Prepared::Spacer(gap),
        }
    }
}

struct PreparedWidget {
    background: Color,
    padding: f32,
    body: Prepared,
}

impl From<Widget> for PreparedWidget {
    fn from(widget: Widget) -> Self {
        Self {
            background: to_color(widget.background),
            padding: widget.padding,
            body: widget.body.into(),
        }
    }
}

pub struct TimeProgressApplet {
    core: Core,
    popup: Option<Id>,

    config: TimeProgressConfig,
    palette: Palette,

    // Last clock sample from the host
    now: NaiveDateTime,

    // Rendered gauges, rebuilt from `update` when their inputs change
    day_percent: String,
    panel_ring: RenderCache<u32, Option<ImageData>>,
    popup_widget: RenderCache<(LayoutSize, [u32; 4]), PreparedWidget>,
}

#[derive(Clone, Debug)]
pub enum Message {
    TogglePopup,
    PopupClosed(Id),
    Tick(NaiveDateTime),
    ConfigChanged(TimeProgressConfig),
    CycleLayout,
    TogglePercentageText(bool),
    SetRefreshInterval(u32),
}

/// Direction of the container a node is placed in
#[derive(Clone, Copy)]
enum Axis {
    Vertical,
    Horizontal,
}

impl cosmic::Application for TimeProgressApplet {
    type Executor = cosmic::SingleThreadExecutor;
    type Flags = ();
    type Message = Message;
    const APP_ID: &'static str = config::APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, _flags: Self::Flags) -> (Self, app::Task<Self::Message>) {
        let mut config = cosmic::cosmic_config::Config::new(Self::APP_ID, TimeProgressConfig::VERSION)
            .ok()
            .and_then(|c| TimeProgressConfig::get_entry(&c).ok())
            .unwrap_or_default();
        config.validate();

        let mut applet = Self {
            core,
            popup: None,
            config,
            palette: Palette::default(),
            now: clock::local_now(),
            day_percent: String::new(),
            panel_ring: RenderCache::default(),
            popup_widget: RenderCache::default(),
        };
        applet.refresh_gauges();
        (applet, Task::none())
    }

    fn on_close_requested(&self, id: Id) -> Option<Message> {
        Some(Message::PopupClosed(id))
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        let config_watcher = self.core.watch_config(Self::APP_ID).map(|u| {
            for err in u.errors {
                tracing::error!(?err, "Error watching config");
            }
            Message::ConfigChanged(u.config)
        });

        Subscription::batch([
            config_watcher,
            clock::clock_subscription(self.config.refresh_interval_seconds).map(Message::Tick),
        ])
    }

    fn update(&mut self, message: Self::Message) -> app::Task<Self::Message> {
        match message {
            Message::TogglePopup => {
                return if let Some(p) = self.popup.take() {
                    destroy_popup(p)
                } else {
                    let Some(main_id) = self.core.main_window_id() else {
                        return Task::none();
                    };
                    // the popup must never show a stale sample
                    self.now = clock::local_now();
                    self.refresh_gauges();
                    let new_id = Id::unique();
                    self.popup = Some(new_id);
                    let popup_settings = self.core.applet.get_popup_settings(
                        main_id,
                        new_id,
                        Some((1, 1)),
                        None,
                        None,
                    );
                    get_popup(popup_settings)
                };
            }
            Message::PopupClosed(id) => {
                if self.popup.as_ref() == Some(&id) {
                    self.popup = None;
                }
            }
            Message::Tick(now) => {
                if now < self.now {
                    warn!(previous = %self.now, %now, "clock moved backwards");
                }
                self.now = now;
                self.refresh_gauges();
            }
            Message::ConfigChanged(mut config) => {
                config.validate();
                self.config = config;
                self.refresh_gauges();
            }
            Message::CycleLayout => {
                self.config.layout = self.config.layout_size().next().as_selector().to_string();
                self.save_config();
                self.refresh_gauges();
            }
            Message::TogglePercentageText(enabled) => {
                self.config.show_percentage_text = enabled;
                self.save_config();
            }
            Message::SetRefreshInterval(seconds) => {
                self.config.refresh_interval_seconds = seconds;
                self.config.validate();
                self.save_config();
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Self::Message> {
        let ring: Element<'_, Message> = match self.panel_ring.get() {
            Some(Some(image)) => image_element(image),
            _ => Space::new(Length::Fixed(PANEL_RING_SIZE as f32), Length::Fixed(PANEL_RING_SIZE as f32)).into(),
        };

        let indicator_button = button::custom(ring)
            .padding(4)
            .class(cosmic::theme::Button::AppletIcon)
            .on_press(Message::TogglePopup);

        let content: Element<'_, Self::Message> = if self.config.show_percentage_text {
            row![
                indicator_button,
                text::body(self.day_percent.as_str()),
            ]
            .align_y(Alignment::Center)
            .spacing(4)
            .into()
        } else {
            indicator_button.into()
        };

        self.core.applet.autosize_window(content).into()
    }

    fn view_window(&self, _id: Id) -> Element<'_, Self::Message> {
        let Spacing {
            space_xxs,
            space_s,
            ..
        } = theme::active().cosmic().spacing;

        let size = self.config.layout_size();
        let (min_refresh, max_refresh) = (*REFRESH_INTERVAL_RANGE.start(), *REFRESH_INTERVAL_RANGE.end());

        let settings = padded_control(
            column![
                row![
                    text::caption("Layout"),
                    horizontal_space(),
                    menu_button(text::caption(size.as_selector()))
                        .on_press(Message::CycleLayout),
                ]
                .align_y(Alignment::Center),
                row![
                    text::caption("Show percentage in panel"),
                    horizontal_space(),
                    toggler(self.config.show_percentage_text)
                        .on_toggle(Message::TogglePercentageText),
                ]
                .align_y(Alignment::Center),
                row![
                    text::caption(format!("Refresh: {} s", self.config.refresh_interval_seconds)),
                    horizontal_space(),
                    slider(
                        REFRESH_INTERVAL_RANGE,
                        self.config.refresh_interval_seconds.clamp(min_refresh, max_refresh),
                        Message::SetRefreshInterval,
                    )
                    .width(Length::Fixed(120.0)),
                ]
                .align_y(Alignment::Center),
            ]
            .spacing(space_xxs)
        );

        let gauges: Element<'_, Message> = match self.popup_widget.get() {
            Some(widget) => widget_element(widget),
            None => Space::with_height(Length::Shrink).into(),
        };

        let content_list = column![
            container(gauges).padding([0, space_s]),
            padded_control(divider::horizontal::default()).padding([space_xxs, space_s]),
            settings,
        ]
        .padding([8, 0]);

        self.core.applet.popup_container(content_list).into()
    }

    fn style(&self) -> Option<cosmic::iced_runtime::Appearance> {
        Some(cosmic::applet::style())
    }
}

impl TimeProgressApplet {
    /// Re-render the panel ring and popup gauges whose inputs changed
    fn refresh_gauges(&mut self) {
        let records = progress_records(self.now, &self.palette);
        let size = self.config.layout_size();

        let day = &records[0];
        self.day_percent = day.percent_text();
        if self.panel_ring.refresh(progress_step(day.fraction), || {
            render_ring(day.fraction, day.color, PANEL_RING_SIZE).map(ImageData::from)
        }) {
            debug!(percent = %self.day_percent, "panel ring redrawn");
        }

        let steps = records.clone().map(|record| progress_step(record.fraction));
        if self.popup_widget.refresh((size, steps), || {
            layout::compose(&records, size).into()
        }) {
            debug!(layout = size.as_selector(), now = %self.now, "popup gauges redrawn");
        }
    }

    /// Save current config to cosmic-config
    fn save_config(&self) {
        if let Ok(config_helper) =
            cosmic::cosmic_config::Config::new(config::APP_ID, TimeProgressConfig::VERSION)
        {
            if let Err(err) = self.config.write_entry(&config_helper) {
                tracing::error!(?err, "Error writing config");
            }
        }
    }
}

fn to_color(c: Rgba) -> Color {
    Color::from_rgba8(c.r, c.g, c.b, f32::from(c.a) / 255.0)
}

fn widget_element(widget: &PreparedWidget) -> Element<'_, Message> {
    let background = widget.background;
    container(node_element(&widget.body, Axis::Vertical))
        .padding(widget.padding)
        .width(Length::Fill)
        .class(cosmic::theme::Container::custom(move |_theme| container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                radius: CORNER_RADIUS.into(),
                ..Default::default()
            },
            ..Default::default()
        }))
        .into()
}

fn node_element(node: &Prepared, axis: Axis) -> Element<'_, Message> {
    match node {
        Prepared::Column { centered, children } => {
            let items: Vec<_> = children
                .iter()
                .map(|child| node_element(child, Axis::Vertical))
                .collect();
            let column = Column::with_children(items).width(Length::Fill);
            if *centered {
                column.align_x(Alignment::Center).into()
            } else {
                column.into()
            }
        }
        Prepared::Row(children) => {
            let items: Vec<_> = children
                .iter()
                .map(|child| node_element(child, Axis::Horizontal))
                .collect();
            Row::with_children(items).align_y(Alignment::Center).into()
        }
        Prepared::Image(image) => image_element(image),
        Prepared::Text { content, style } => text_element(content, style),
        Prepared::Spacer(Some(gap)) => match axis {
            Axis::Vertical => Space::with_height(Length::Fixed(*gap)).into(),
            Axis::Horizontal => Space::with_width(Length::Fixed(*gap)).into(),
        },
        Prepared::Spacer(None) => match axis {
            Axis::Vertical => vertical_space().into(),
            Axis::Horizontal => horizontal_space().into(),
        },
    }
}

fn image_element(image: &ImageData) -> Element<'static, Message> {
    Image::new(image.handle.clone())
        .width(Length::Fixed(image.width as f32))
        .height(Length::Fixed(image.height as f32))
        .into()
}

fn text_element<'a>(content: &'a str, style: &TextStyle) -> Element<'a, Message> {
    let weight = match style.weight {
        FontWeight::Medium => Weight::Medium,
        FontWeight::Bold => Weight::Bold,
    };
    let label = text(content)
        .size(style.size)
        .font(cosmic::iced::Font {
            weight,
            ..cosmic::iced::Font::DEFAULT
        })
        .class(cosmic::theme::Text::Color(to_color(style.color)));

    match (style.width, style.align) {
        (Some(width), _) => label.width(Length::Fixed(width)).into(),
        (None, TextAlign::Center) => label
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .into(),
        (None, TextAlign::Leading) => label.into(),
    }
}
