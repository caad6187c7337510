// SPDX-License-Identifier: MPL-2.0
//! Slide stage and fullscreen overlay.
//!
//! Both views draw the same layers: the slide currently on stage and, while
//! a transition runs, the slide leaving it. Arrow buttons and the
//! play/download/fullscreen cluster float above the layers.

use crate::gallery::{Catalog, GalleryImage, GalleryState};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::icons::{self, Icon};
use crate::ui::styles;
use crate::ui::transition::{ease_in_out, layer_style, ActiveTransition, LayerStyle};
use iced::widget::image::{self, Image};
use iced::widget::{button, text, tooltip, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Color, ContentFit, Element, Length, Padding, Theme};
use std::time::Instant;

/// User intents raised by the carousel views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
    JumpTo(usize),
    TogglePlay,
    ToggleFullscreen,
    ExitFullscreen,
    Download,
}

/// Display state of one slide's picture.
#[derive(Debug, Clone, Default)]
pub enum SlideImage {
    #[default]
    Loading,
    Ready(image::Handle),
    Failed,
}

impl SlideImage {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, SlideImage::Ready(_))
    }
}

#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub state: &'a GalleryState,
    pub slides: &'a [SlideImage],
    pub transition: Option<ActiveTransition>,
    pub now: Instant,
}

/// Slides to draw, back to front, with their presentation at `now`.
///
/// Outside a transition only the current slide is drawn.
#[must_use]
pub fn visible_layers(
    state: &GalleryState,
    transition: Option<ActiveTransition>,
    now: Instant,
) -> Vec<(usize, LayerStyle)> {
    let current = state.current_index();
    match transition {
        Some(transition) if transition.from() != current && !transition.is_finished(now) => {
            let eased = ease_in_out(transition.progress(now));
            vec![
                (
                    transition.from(),
                    layer_style(state.visual_state(transition.from()), eased),
                ),
                (current, layer_style(state.visual_state(current), eased)),
            ]
        }
        _ => vec![(current, LayerStyle::ON_STAGE)],
    }
}

/// The framed stage shown in windowed mode.
pub fn stage<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill);
    for layer in slide_layers(ctx) {
        layers = layers.push(layer);
    }

    let layers = layers
        .push(arrows(ctx.i18n, sizing::ICON_LG))
        .push(
            Container::new(action_cluster(ctx))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .padding(spacing::MD),
        );

    Container::new(layers)
        .width(Length::Fill)
        .max_width(sizing::STAGE_MAX_WIDTH)
        .height(Length::Fixed(sizing::STAGE_HEIGHT))
        .clip(true)
        .style(styles::container::stage)
        .into()
}

/// Black full-window overlay with close button and larger arrows.
pub fn fullscreen<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill);
    for layer in slide_layers(ctx) {
        layers = layers.push(layer);
    }

    let close = styles::tooltip::styled(
        round_button(Icon::X, sizing::ICON_XL, Message::ExitFullscreen),
        ctx.i18n.tr("tooltip-close"),
        tooltip::Position::Left,
    );

    let layers = layers.push(arrows(ctx.i18n, sizing::ICON_XL)).push(
        Container::new(close)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .padding(spacing::LG),
    );

    Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::fullscreen)
        .into()
}

fn slide_layers<'a>(ctx: ViewContext<'a>) -> Vec<Element<'a, Message>> {
    visible_layers(ctx.state, ctx.transition, ctx.now)
        .into_iter()
        .filter_map(|(index, style)| {
            let image = ctx.catalog.get(index)?;
            let slide = ctx.slides.get(index).unwrap_or(&SlideImage::Failed);
            Some(slide_layer(ctx.i18n, image, slide, style))
        })
        .collect()
}

fn slide_layer<'a>(
    i18n: &'a I18n,
    image: &'a GalleryImage,
    slide: &'a SlideImage,
    style: LayerStyle,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match slide {
        SlideImage::Ready(handle) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .opacity(style.opacity)
            .into(),
        SlideImage::Loading => placeholder(i18n.tr("slide-loading"), style.opacity),
        SlideImage::Failed => placeholder(i18n.tr("slide-failed"), style.opacity),
    };

    let fade = move |color: Color| Color {
        a: color.a * style.opacity,
        ..color
    };
    let caption = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(
                Text::new(image.title.as_str())
                    .size(typography::TITLE_LG)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(fade(palette::WHITE)),
                    }),
            )
            .push(
                Text::new(image.description.as_str())
                    .size(typography::BODY_LG)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(fade(palette::GRAY_300)),
                    }),
            ),
    )
    .width(Length::Fill)
    .padding(spacing::XL)
    .style(move |theme: &Theme| {
        let mut band = styles::container::caption(theme);
        if let Some(iced::Background::Color(color)) = band.background {
            band.background = Some(iced::Background::Color(fade(color)));
        }
        band
    });

    let content = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(picture)
        .push(
            Container::new(caption)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(alignment::Vertical::Bottom),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(inset(style))
        .into()
}

/// Offset and scale of a layer expressed as padding around the slide.
fn inset(style: LayerStyle) -> Padding {
    let shrink = (1.0 - style.scale).max(0.0) / 2.0;
    let x = shrink * sizing::STAGE_MAX_WIDTH;
    let y = shrink * sizing::STAGE_HEIGHT;
    Padding {
        top: y,
        bottom: y,
        left: x + style.offset_x.max(0.0),
        right: x + (-style.offset_x).max(0.0),
    }
}

fn placeholder<'a>(label: String, alpha: f32) -> Element<'a, Message> {
    let color = Color {
        a: alpha,
        ..palette::GRAY_500
    };
    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(icons::sized(Icon::Image, sizing::ICON_XL, color))
            .push(
                Text::new(label)
                    .size(typography::BODY)
                    .style(move |_theme: &Theme| text::Style { color: Some(color) }),
            ),
    )
    .center(Length::Fill)
    .into()
}

fn round_button<'a>(icon: Icon, size: f32, on_press: Message) -> button::Button<'a, Message> {
    button(icons::sized(icon, size, palette::WHITE))
        .on_press(on_press)
        .padding(spacing::SM)
        .style(styles::button::overlay(opacity::OVERLAY_MEDIUM))
}

fn arrows<'a>(i18n: &'a I18n, size: f32) -> Element<'a, Message> {
    let previous = styles::tooltip::styled(
        round_button(Icon::ChevronLeft, size, Message::Previous),
        i18n.tr("tooltip-previous"),
        tooltip::Position::Right,
    );
    let next = styles::tooltip::styled(
        round_button(Icon::ChevronRight, size, Message::Next),
        i18n.tr("tooltip-next"),
        tooltip::Position::Left,
    );

    Container::new(
        Row::new()
            .align_y(alignment::Vertical::Center)
            .push(previous)
            .push(Space::new().width(Length::Fill))
            .push(next),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(alignment::Vertical::Center)
    .padding(spacing::MD)
    .into()
}

fn action_cluster<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let (play_icon, play_label) = if ctx.state.is_playing() {
        (Icon::Pause, "tooltip-pause")
    } else {
        (Icon::Play, "tooltip-play")
    };

    let buttons = [
        (play_icon, play_label, Message::TogglePlay),
        (Icon::Download, "tooltip-download", Message::Download),
        (Icon::Maximize2, "tooltip-fullscreen", Message::ToggleFullscreen),
    ];

    buttons
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, (icon, label, message)| {
            row.push(styles::tooltip::styled(
                round_button(icon, sizing::ICON_MD, message),
                ctx.i18n.tr(label),
                tooltip::Position::Bottom,
            ))
        })
        .into()
}
